use std::collections::HashMap;

use image::{Rgb, RgbImage};
use kmeans_colors::get_kmeans;
use palette::Srgb;

/// Number of clusters used to find a cover's dominant color.
pub const CLUSTERS: usize = 5;

const MAX_ITERATIONS: usize = 20;
const CONVERGENCE: f32 = 1e-4;
const SEED: u64 = 0;

/// Luma at or above which captions are drawn in black.
pub const LUMA_THRESHOLD: f32 = 128.0;

pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
pub const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

/// Most common color of `image`, using [`CLUSTERS`] clusters.
pub fn dominant_color(image: &RgbImage) -> Rgb<u8> {
    dominant_color_with(image, CLUSTERS)
}

/// Most common color of `image` after k-means clustering with `k` clusters.
///
/// Every pixel is assigned to its nearest centroid and the centroid with the
/// most members wins, ties going to the lower centroid index. Images with at
/// most `k` distinct colors are their own clustering, so the most frequent
/// color is returned as is. An empty image yields black.
pub fn dominant_color_with(image: &RgbImage, k: usize) -> Rgb<u8> {
    let k = k.max(1);

    let mut histogram: HashMap<[u8; 3], usize> = HashMap::new();
    for pixel in image.pixels() {
        *histogram.entry(pixel.0).or_default() += 1;
    }

    if histogram.len() <= k {
        return histogram
            .into_iter()
            .max_by(|(a_color, a_count), (b_color, b_count)| {
                // equal counts resolve to the smaller color so the result is stable
                a_count.cmp(b_count).then_with(|| b_color.cmp(a_color))
            })
            .map(|(color, _)| Rgb(color))
            .unwrap_or(BLACK);
    }

    let points: Vec<Srgb<f32>> = image
        .pixels()
        .map(|p| Srgb::new(p[0], p[1], p[2]).into_format())
        .collect();

    let result = get_kmeans(k, MAX_ITERATIONS, CONVERGENCE, false, &points, SEED);
    if result.centroids.is_empty() {
        return BLACK;
    }

    let mut members = vec![0usize; result.centroids.len()];
    for point in &points {
        members[nearest(point, &result.centroids)] += 1;
    }

    let mut winner = 0;
    for (index, count) in members.iter().enumerate() {
        if *count > members[winner] {
            winner = index;
        }
    }

    let peak: Srgb<u8> = result.centroids[winner].into_format();
    Rgb([peak.red, peak.green, peak.blue])
}

fn nearest(point: &Srgb<f32>, centroids: &[Srgb<f32>]) -> usize {
    let mut best = 0;
    let mut best_distance = f32::INFINITY;
    for (index, centroid) in centroids.iter().enumerate() {
        let distance = (point.red - centroid.red).powi(2)
            + (point.green - centroid.green).powi(2)
            + (point.blue - centroid.blue).powi(2);
        if distance < best_distance {
            best = index;
            best_distance = distance;
        }
    }
    best
}

/// Relative luminance approximation on the 0-255 scale.
pub fn luma(color: Rgb<u8>) -> f32 {
    0.2126 * color[0] as f32 + 0.7152 * color[1] as f32 + 0.0722 * color[2] as f32
}

/// Caption color readable on top of `background`: white on dark, black on light.
pub fn font_color(background: Rgb<u8>) -> Rgb<u8> {
    if luma(background) < LUMA_THRESHOLD {
        WHITE
    } else {
        BLACK
    }
}

/// `rrggbb` hex notation of `color`.
pub fn to_hex(color: Rgb<u8>) -> String {
    format!("{:02x}{:02x}{:02x}", color[0], color[1], color[2])
}
