use emblem::chain::ChainId;
use emblem::company::Token;
use emblem::pipeline::{self, TokenArtifacts};
use image::{ImageFormat, RgbaImage};
use std::path::Path;

fn usdc_token() -> Token {
    Token {
        chain: ChainId::Numeric(1),
        address: "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48".to_string(),
        logo: "https://assets.example.com/usdc.png".to_string(),
    }
}

/// Stages a downloaded original for `token` under `tokens_dir` as if the
/// fetch step had just completed.
fn stage_original(token: &Token, tokens_dir: &Path, width: u32, height: u32) -> TokenArtifacts {
    let artifacts =
        TokenArtifacts::new(token, tokens_dir).expect("Could not resolve artifact paths");
    std::fs::create_dir_all(&artifacts.token_dir).expect("Could not create token dir");

    let img = RgbaImage::from_fn(width, height, |x, y| {
        if (x / 8 + y / 8) % 2 == 0 {
            image::Rgba([255, 255, 255, 255])
        } else {
            image::Rgba([30, 64, 175, 255])
        }
    });
    img.save_with_format(&artifacts.original, ImageFormat::Png)
        .expect("Could not write staged original");

    artifacts
}

#[test]
fn processing_writes_all_four_artifacts() {
    let tokens_dir = tempfile::tempdir().expect("Could not create temp dir");
    let artifacts = stage_original(&usdc_token(), tokens_dir.path(), 64, 48);

    pipeline::process_original(&artifacts).expect("Could not process original");

    assert!(artifacts.png.exists());
    assert!(artifacts.svg.exists());
    assert!(artifacts.png_32.exists());
    assert!(artifacts.png_128.exists());

    // The temporary download is removed on success
    assert!(!artifacts.original.exists());

    // Thumbnails have the advertised dimensions even for non-square sources
    let thumb = image::open(&artifacts.png_128).expect("Could not open thumbnail");
    assert_eq!((thumb.width(), thumb.height()), (128, 128));
    let thumb = image::open(&artifacts.png_32).expect("Could not open thumbnail");
    assert_eq!((thumb.width(), thumb.height()), (32, 32));

    let svg = std::fs::read_to_string(&artifacts.svg).expect("Could not read svg");
    assert!(svg.contains("<svg"));
}

#[test]
fn processing_twice_overwrites_without_error() {
    let tokens_dir = tempfile::tempdir().expect("Could not create temp dir");
    let token = usdc_token();

    let artifacts = stage_original(&token, tokens_dir.path(), 64, 64);
    pipeline::process_original(&artifacts).expect("Could not process original");

    // Second run against the same directory layout
    let artifacts = stage_original(&token, tokens_dir.path(), 64, 64);
    pipeline::process_original(&artifacts).expect("Could not process original on second run");

    assert!(artifacts.png.exists());
    assert!(!artifacts.original.exists());
}

#[test]
fn undecodable_original_fails_without_artifacts() {
    let tokens_dir = tempfile::tempdir().expect("Could not create temp dir");
    let artifacts = TokenArtifacts::new(&usdc_token(), tokens_dir.path())
        .expect("Could not resolve artifact paths");
    std::fs::create_dir_all(&artifacts.token_dir).expect("Could not create token dir");
    std::fs::write(&artifacts.original, b"not an image").expect("Could not write original");

    let result = pipeline::process_original(&artifacts);

    assert!(result.is_err());
    assert!(!artifacts.png.exists());
    assert!(!artifacts.svg.exists());
    assert!(!artifacts.png_32.exists());
    assert!(!artifacts.png_128.exists());

    // The temporary download is only cleaned up on success
    assert!(artifacts.original.exists());
}

#[test]
fn unreachable_logo_fails_after_directory_setup() {
    let tokens_dir = tempfile::tempdir().expect("Could not create temp dir");
    let token = Token {
        chain: ChainId::Numeric(1),
        address: "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48".to_string(),
        // RFC 2606 reserved name, guaranteed not to resolve
        logo: "https://logo.invalid/usdc.png".to_string(),
    };

    let result = init_tokio_runtime()
        .block_on(async { pipeline::build_token_assets(&token, tokens_dir.path()).await });

    assert!(result.is_err());

    // Directory bookkeeping already happened; no artifacts were written
    let token_dir = tokens_dir
        .path()
        .join("1")
        .join(token.address.to_lowercase());
    assert!(token_dir.exists());
    assert!(!token_dir.join("logo.png").exists());
}

/// Initialize Tokio runtime
fn init_tokio_runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("Could not build tokio runtime")
}
