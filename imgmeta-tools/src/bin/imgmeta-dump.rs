use tracing_subscriber::prelude::*;

fn main() {
    let Some(path) = std::env::args().nth(1) else {
        // Missing path is answered with a hint instead of an error
        println!("Usage: imgmeta-dump <image.png>");
        return;
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::builder().from_env_lossy())
        .with(tracing_subscriber::fmt::Layer::default().compact())
        .init();

    let file_data = std::fs::read(path).unwrap();
    let image = imgmeta::Image::new(file_data).unwrap();

    println!("=== Image Info ===");
    for (key, value) in image.info() {
        println!("{key}: {value}");
    }

    if let imgmeta::Image::Png(png) = &image {
        println!();
        println!("=== PNG Text Chunks ===");
        for chunk in png.text_chunks() {
            println!("{}: {}", chunk.keyword, chunk.text);
        }
    }
}
