use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VolumeStats {
    pub last_volume: f64,
    pub average_volume: f64,
}

/// Last volume and the mean of the trailing `days` volumes, shrinking the
/// window when fewer bars are available.
pub fn volume_stats(volumes: &[f64], days: usize) -> Option<VolumeStats> {
    let last_volume = *volumes.last()?;
    if days == 0 {
        return None;
    }
    let recent = &volumes[volumes.len().saturating_sub(days)..];
    let n = recent.len() as f64;
    let mut average_volume = recent.iter().sum::<f64>() / n;
    if !average_volume.is_finite() {
        // The plain sum overflowed; scale each term first.
        average_volume = recent.iter().map(|v| v / n).sum();
    }
    Some(VolumeStats {
        last_volume,
        average_volume,
    })
}
