use futures::future::join_all;
use image::{GrayImage, ImageBuffer, Luma};
use mean_ratio::{FilterConfig, MeanRatioImageFilter, Radius};
use std::sync::Arc;

const SIZE: u32 = 48;

fn scene(seed: u32) -> GrayImage {
    ImageBuffer::from_fn(SIZE, SIZE, |x, y| {
        Luma([((x * 31 + y * 17 + seed * 7) % 251) as u8])
    })
}

fn interior_rows(
    filter: &MeanRatioImageFilter<f32>,
    a: &GrayImage,
    b: &GrayImage,
    rows: &[u32],
) -> Vec<f32> {
    let r = filter.radius().extents()[0] as u32;
    let mut out = Vec::new();
    for &y in rows {
        for x in r..SIZE - r {
            out.push(filter.evaluate_pair_at(a, b, x, y).unwrap());
        }
    }
    out
}

#[tokio::test(flavor = "multi_thread")]
async fn concurrent_evaluation_matches_sequential() {
    let filter = Arc::new(MeanRatioImageFilter::<f32>::mean_ratio(FilterConfig::with_radius(
        Radius::square(2).unwrap(),
    )));
    let before = Arc::new(scene(1));
    let after = Arc::new(scene(2));

    let rows: Vec<u32> = (2..SIZE - 2).collect();
    let sequential = interior_rows(&filter, &before, &after, &rows);

    let workers = num_cpus::get().max(2);
    let per_worker = rows.len().div_ceil(workers);
    let tasks = rows.chunks(per_worker).map(|band| {
        let band = band.to_vec();
        let filter = Arc::clone(&filter);
        let before = Arc::clone(&before);
        let after = Arc::clone(&after);
        tokio::spawn(async move { interior_rows(&filter, &before, &after, &band) })
    });

    let concurrent: Vec<f32> = join_all(tasks)
        .await
        .into_iter()
        .flat_map(|band| band.expect("worker panicked"))
        .collect();

    assert_eq!(concurrent, sequential);
}

#[test]
fn filters_are_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<MeanRatioImageFilter<u8>>();
    assert_send_sync::<mean_ratio::MeanFilter<f64>>();
}
