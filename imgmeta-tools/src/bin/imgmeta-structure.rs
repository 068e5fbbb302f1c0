use tracing_subscriber::prelude::*;

fn main() {
    let path = std::env::args().nth(1).unwrap();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::builder().from_env_lossy())
        .with(tracing_subscriber::fmt::Layer::default().compact())
        .init();

    let image_data = std::fs::read(path).unwrap();
    let image = imgmeta::Image::new(image_data).unwrap();

    match image {
        imgmeta::Image::Png(png) => show_png(png),
        imgmeta::Image::Jpeg(jpeg) => show_jpeg(jpeg),
        unknown => panic!("Unknown file type: {unknown:?}"),
    }
}

fn show_png(png: imgmeta::png::Png) {
    fn show_repeats(n: u32, chunk_type: imgmeta::png::ChunkType) {
        if n > 1 {
            println!(" - {chunk_type:?} ({n}x)");
        } else {
            println!(" - {chunk_type:?}");
        }
    }

    println!("PNG Chunks:");
    let mut n_repeats = 1;
    let mut last_type = None;
    for chunk in png.chunks() {
        if last_type == Some(chunk.chunk_type()) {
            n_repeats += 1;
            continue;
        }

        if let Some(last) = last_type {
            show_repeats(n_repeats, last);
        }
        last_type = Some(chunk.chunk_type());
        n_repeats = 1;
    }
    if let Some(last) = last_type {
        show_repeats(n_repeats, last);
    }
}

fn show_jpeg(jpeg: imgmeta::jpeg::Jpeg) {
    println!("JPEG Segments:");
    for segment in jpeg.segments() {
        println!(" - {:?}", segment.marker());
    }
}
