//! Coverflow geometry for slides around the current index.

/// Visual placement of one slide relative to the current slide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideLayout {
    /// Signed distance from the current slide, taking the shorter way
    /// round the circle.
    pub position: i32,
    /// Horizontal offset as a percentage of the slide width.
    pub translate_pct: f32,
    pub scale: f32,
    pub opacity: f32,
    pub z_index: i32,
}

/// Circular signed offset of `index` from `current` in a list of `len`.
pub fn circular_offset(index: usize, current: usize, len: usize) -> i32 {
    if len == 0 {
        return 0;
    }
    let len_i = len as i32;
    let mut diff = index as i32 - current as i32;
    if diff.abs() as f32 > len as f32 / 2.0 {
        diff = if diff > 0 { diff - len_i } else { diff + len_i };
    }
    diff
}

pub fn slide_layout(index: usize, current: usize, len: usize) -> SlideLayout {
    let position = circular_offset(index, current, len);
    let distance = position.unsigned_abs() as f32;
    SlideLayout {
        position,
        translate_pct: position as f32 * 120.0,
        scale: (1.0 - distance * 0.2).max(0.8),
        opacity: (1.0 - distance * 0.4).max(0.5),
        z_index: len as i32 - position.abs(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_slide_is_centered() {
        let l = slide_layout(2, 2, 4);
        assert_eq!(l.position, 0);
        assert_eq!(l.scale, 1.0);
        assert_eq!(l.opacity, 1.0);
        assert_eq!(l.z_index, 4);
    }

    #[test]
    fn wraps_the_short_way() {
        // Last slide sits immediately left of the first.
        assert_eq!(circular_offset(3, 0, 4), -1);
        assert_eq!(circular_offset(0, 3, 4), 1);
        assert_eq!(circular_offset(1, 0, 4), 1);
    }

    #[test]
    fn neighbours_shrink_and_fade_with_floor() {
        let near = slide_layout(1, 0, 5);
        assert!((near.scale - 0.8).abs() < 1e-6);
        assert!((near.opacity - 0.6).abs() < 1e-6);
        let far = slide_layout(2, 0, 5);
        assert_eq!(far.scale, 0.8);
        assert_eq!(far.opacity, 0.5);
        assert_eq!(far.translate_pct, 240.0);
    }
}
