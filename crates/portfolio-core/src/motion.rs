//! Small easing helpers shared by the frame-driven page effects.

/// Exponential approach of `current` toward `target` over `dt_sec`, with
/// time constant `tau_sec`. Frame-rate independent: the same wall-clock
/// interval covers the same fraction of the remaining distance regardless
/// of how it is sliced into frames.
pub fn approach(current: f32, target: f32, tau_sec: f32, dt_sec: f32) -> f32 {
    if tau_sec <= 0.0 {
        return target;
    }
    let alpha = 1.0 - (-dt_sec / tau_sec).exp();
    current + (target - current) * alpha
}
