use super::actions::RemoteAction;

/// Integer-pixel rectangle in window coordinates, recorded on every layout
/// pass of the video surface. Used as the morph hint when the window
/// transitions into its miniature form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WindowRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl WindowRect {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }
}

/// Aspect ratio of the content, kept as the original width:height pair so
/// the host can shape the miniature window exactly.
///
/// Degenerate dimensions are a caller bug: the entry strategies only build
/// a ratio after checking that the content size is known and non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AspectRatio {
    width: u32,
    height: u32,
}

impl AspectRatio {
    /// Panics if either dimension is zero.
    pub fn new(width: u32, height: u32) -> Self {
        assert!(
            width > 0 && height > 0,
            "aspect ratio requires non-degenerate dimensions ({width}x{height})"
        );
        Self { width, height }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn as_f32(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

/// Parameters submitted to the host describing the miniature form.
///
/// A fresh value is built on every submission; nothing is cached across
/// calls, so the action set always reflects the current playing state.
/// `aspect_ratio` and `source_rect` are present only when the player is
/// eligible and its content dimensions are known. `auto_enter` is present
/// only on platform versions that support declarative entry.
#[derive(Debug, Clone, PartialEq)]
pub struct PipParams {
    pub actions: Vec<RemoteAction>,
    pub aspect_ratio: Option<AspectRatio>,
    pub source_rect: Option<WindowRect>,
    pub auto_enter: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_dimensions() {
        let rect = WindowRect::new(10, 20, 110, 220);
        assert_eq!(rect.width(), 100);
        assert_eq!(rect.height(), 200);
    }

    #[test]
    fn aspect_ratio_keeps_exact_pair() {
        let ratio = AspectRatio::new(1920, 1080);
        assert_eq!(ratio.width(), 1920);
        assert_eq!(ratio.height(), 1080);
        assert!((ratio.as_f32() - 16.0 / 9.0).abs() < f32::EPSILON);
    }

    #[test]
    #[should_panic(expected = "non-degenerate")]
    fn zero_dimension_is_a_caller_bug() {
        let _ = AspectRatio::new(0, 1080);
    }
}
