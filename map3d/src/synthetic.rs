/// Inspection-like row: a low ripple with a defect that drifts across the
/// width as rows advance.
pub fn synthetic_row(index: usize, width: usize, peak: i32) -> Vec<i32> {
    let t = index as f64;
    let defect = (t * 0.15).sin() * 0.5 + 0.5;
    (0..width)
        .map(|x| {
            let u = if width > 1 {
                x as f64 / (width - 1) as f64
            } else {
                0.0
            };
            let ripple = ((u * 9.0 + t * 0.4).sin() * 0.5 + 0.5) * 0.2;
            let distance = (u - defect).abs() * 8.0;
            let bump = (-distance * distance).exp();
            ((ripple + bump) * f64::from(peak)).round() as i32
        })
        .collect()
}
