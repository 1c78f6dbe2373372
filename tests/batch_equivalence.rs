#![cfg(feature = "rayon")]

use blockmatch::{
    match_templates, match_templates_par, scan_full, scan_full_par, BlockMatchError, GridView,
    IntensityGrid, Metric,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_grid(rng: &mut StdRng, width: usize, height: usize) -> IntensityGrid {
    let mut data = vec![0u8; width * height];
    for value in data.iter_mut() {
        *value = rng.random_range(0..=255);
    }
    IntensityGrid::from_vec(data, width, height).unwrap()
}

#[test]
fn parallel_scan_matches_sequential() {
    let mut rng = StdRng::seed_from_u64(2024);
    let subject = random_grid(&mut rng, 48, 36);
    let template = random_grid(&mut rng, 7, 5);

    for metric in [Metric::Sad, Metric::Ssd] {
        for k in [1, 7, 100] {
            let seq = scan_full(subject.view(), template.view(), k, metric).unwrap();
            let par = scan_full_par(subject.view(), template.view(), k, metric).unwrap();
            assert_eq!(seq, par);
        }
    }
}

#[test]
fn parallel_scan_preserves_tie_order() {
    // Low-entropy grid to force many duplicate scores across rows.
    let mut rng = StdRng::seed_from_u64(9);
    let mut data = vec![0u8; 40 * 30];
    for value in data.iter_mut() {
        *value = rng.random_range(0..=1);
    }
    let subject = IntensityGrid::from_vec(data, 40, 30).unwrap();
    let template = IntensityGrid::from_vec(vec![0u8; 4], 2, 2).unwrap();

    let seq = scan_full(subject.view(), template.view(), 25, Metric::Sad).unwrap();
    let par = scan_full_par(subject.view(), template.view(), 25, Metric::Sad).unwrap();
    assert_eq!(seq, par);
}

#[test]
fn parallel_batch_matches_sequential() {
    let mut rng = StdRng::seed_from_u64(404);
    let subject = random_grid(&mut rng, 32, 24);
    let templates: Vec<IntensityGrid> = (0..6)
        .map(|_| {
            let width = rng.random_range(2..=6);
            let height = rng.random_range(2..=6);
            random_grid(&mut rng, width, height)
        })
        .collect();
    let views: Vec<GridView<'_>> = templates.iter().map(IntensityGrid::view).collect();

    let seq = match_templates(subject.view(), &views, 9, Metric::Sad).unwrap();
    let par = match_templates_par(subject.view(), &views, 9, Metric::Sad).unwrap();
    assert_eq!(seq, par);
    assert_eq!(seq.len(), templates.len());
}

#[test]
fn batch_fails_on_first_oversized_template() {
    let mut rng = StdRng::seed_from_u64(5);
    let subject = random_grid(&mut rng, 10, 10);
    let fits = random_grid(&mut rng, 3, 3);
    let too_tall = random_grid(&mut rng, 3, 11);
    let views = [fits.view(), too_tall.view()];

    let expected = BlockMatchError::TemplateExceedsSubject {
        tpl_width: 3,
        tpl_height: 11,
        sub_width: 10,
        sub_height: 10,
    };
    let err = match_templates(subject.view(), &views, 4, Metric::Sad)
        .err()
        .unwrap();
    assert_eq!(err, expected);

    let err = match_templates_par(subject.view(), &views, 4, Metric::Sad)
        .err()
        .unwrap();
    assert_eq!(err, expected);
}
