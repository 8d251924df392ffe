//! The open/close tween.

use slidekit_core::{Easing, Edge, MenuStyle};

/// One sampled animation frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimationFrame {
    pub offset: i32,
    pub finished: bool,
}

/// A tween from the current offset to a menu's open or closed bound.
///
/// Duration is proportional to the remaining distance:
/// `anim_duration_ms * |remaining| / size`, so a release next to the bound
/// barely animates and a release at the bound is instant. The first sample
/// latches the start time; callers just forward frame timestamps.
#[derive(Clone, Debug)]
pub struct SlideAnimation {
    edge: Edge,
    opening: bool,
    start_offset: i32,
    target_offset: i32,
    duration_ms: u64,
    easing: Easing,
    start_time_ms: Option<u64>,
}

impl SlideAnimation {
    /// Tween from `current_offset` to the fully open offset.
    pub fn open(edge: Edge, current_offset: i32, style: &MenuStyle) -> Self {
        let target = edge.sign() * style.size();
        Self::toward(edge, current_offset, target, true, style)
    }

    /// Tween from `current_offset` back to zero.
    pub fn close(edge: Edge, current_offset: i32, style: &MenuStyle) -> Self {
        Self::toward(edge, current_offset, 0, false, style)
    }

    fn toward(
        edge: Edge,
        current_offset: i32,
        target_offset: i32,
        opening: bool,
        style: &MenuStyle,
    ) -> Self {
        let size = style.size();
        let remaining = (target_offset - current_offset).unsigned_abs() as u64;
        let duration_ms = if size > 0 {
            (style.anim_duration_ms as u64).saturating_mul(remaining) / size as u64
        } else {
            0
        };

        Self {
            edge,
            opening,
            start_offset: current_offset,
            target_offset,
            duration_ms,
            easing: style.easing,
            start_time_ms: None,
        }
    }

    pub fn edge(&self) -> Edge {
        self.edge
    }

    pub fn opening(&self) -> bool {
        self.opening
    }

    pub fn target_offset(&self) -> i32 {
        self.target_offset
    }

    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    /// A zero-duration tween must be applied synchronously by the caller;
    /// there will never be a frame to finish it.
    pub fn is_instant(&self) -> bool {
        self.duration_ms == 0
    }

    /// Samples the tween at a host frame time.
    pub fn sample(&mut self, now_ms: u64) -> AnimationFrame {
        if self.duration_ms == 0 {
            return AnimationFrame {
                offset: self.target_offset,
                finished: true,
            };
        }

        let start = *self.start_time_ms.get_or_insert(now_ms);
        let elapsed = now_ms.saturating_sub(start);
        let linear = (elapsed as f32 / self.duration_ms as f32).clamp(0.0, 1.0);
        let eased = self.easing.transform(linear);

        let distance = (self.target_offset - self.start_offset) as f32;
        let offset = self.start_offset + (distance * eased).round() as i32;
        // Integer rounding may land on the bound early; never pass it.
        let offset = if self.start_offset <= self.target_offset {
            offset.clamp(self.start_offset, self.target_offset)
        } else {
            offset.clamp(self.target_offset, self.start_offset)
        };

        AnimationFrame {
            offset,
            finished: linear >= 1.0 || offset == self.target_offset,
        }
    }
}

#[cfg(test)]
#[path = "tests/slide_tests.rs"]
mod tests;
