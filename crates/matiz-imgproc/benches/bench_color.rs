use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use matiz_image::{Image, ImageSize};
use matiz_imgproc::color::{gray_from_rgb, hsi_from_rgb, hsv_from_rgb};

fn bench_color(c: &mut Criterion) {
    let mut group = c.benchmark_group("color");

    for (width, height) in [(256, 224), (512, 448), (1024, 896)].iter() {
        let parameter_string = format!("{}x{}", width, height);

        let image_size = ImageSize {
            width: *width,
            height: *height,
        };

        let image_data = vec![128u8; width * height * 3];
        let image = Image::<u8, 3>::new(image_size, image_data).unwrap();
        let image_f32 = image.cast::<f32>().unwrap();

        let gray = Image::<f32, 1>::from_size_val(image_size, 0.0).unwrap();
        let hsv = Image::<f32, 3>::from_size_val(image_size, 0.0).unwrap();

        group.bench_with_input(
            BenchmarkId::new("gray_from_rgb", &parameter_string),
            &(&image_f32, &gray),
            |b, i| {
                let (src, mut dst) = (i.0, i.1.clone());
                b.iter(|| black_box(gray_from_rgb(src, &mut dst)))
            },
        );

        group.bench_with_input(
            BenchmarkId::new("hsv_from_rgb", &parameter_string),
            &(&image_f32, &hsv),
            |b, i| {
                let (src, mut dst) = (i.0, i.1.clone());
                b.iter(|| black_box(hsv_from_rgb(src, &mut dst)))
            },
        );

        group.bench_with_input(
            BenchmarkId::new("hsi_from_rgb", &parameter_string),
            &(&image_f32, &hsv),
            |b, i| {
                let (src, mut dst) = (i.0, i.1.clone());
                b.iter(|| black_box(hsi_from_rgb(src, &mut dst)))
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_color);
criterion_main!(benches);
