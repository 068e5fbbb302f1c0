fn main() {
    let path = std::env::args().nth(1).unwrap();

    let file_data = std::fs::read(path).unwrap();
    let image = imgmeta::Image::new(file_data).unwrap();

    println!("Format: {}", image.format());
    for (key, value) in image.info() {
        println!("{key}: {value}");
    }
}
