//! ASCII Mandelbrot renderer.
//!
//! Every frame samples 120 × 100 points of the complex plane, computes the
//! escape time of each point and maps it to a character of a grey scale
//! ramp. After each frame the view zooms in and pans a little.

/// Maximum number of iterations of the escape-time calculation.
pub const MAX_ITERATIONS: u8 = 32;

/// Grey scale ramp, indexed by escape time. Points that never escape use
/// index 0.
///
/// Based on the character ramps at http://paulbourke.net/dataformats/asciiart/
pub const RAMP: &[u8; MAX_ITERATIONS as usize] = b" ..::--===+++****####%%%%%@@@@@@";

/// Sample rows per frame are `ROW_START..ROW_END`.
const ROW_START: i8 = -60;
const ROW_END: i8 = 60;

/// Sample columns per row are `COL_START..COL_END`.
const COL_START: i8 = -50;
const COL_END: i8 = 50;

/// Sent after the last row of a frame.
const FRAME_TRAILER: &[u8] = b"\r\n";

/// Number of bytes produced by one [`Frame`].
pub const FRAME_LEN: usize = (ROW_END - ROW_START) as usize * ((COL_END - COL_START) as usize + 1)
    + FRAME_TRAILER.len();

/// Escape time of the point `c = px + i·py`.
///
/// Returns the number of completed iterations of `z ← z² + c` before
/// `|z|² > 4`, or `None` if the point did not escape within
/// [`MAX_ITERATIONS`].
pub fn escape_time(px: f32, py: f32) -> Option<u8> {
    let mut x = 0.0f32;
    let mut y = 0.0f32;
    for it in 0..MAX_ITERATIONS {
        let xx = x * x;
        let yy = y * y;
        if xx + yy > 4.0 {
            return Some(it);
        }
        y = 2.0 * x * y + py;
        x = xx - yy + px;
    }
    None
}

/// Escape time of the point `c = px + i·py`, with 0 for points that did not
/// escape.
///
/// Note that this cannot be told apart from a point that escaped right
/// away. Use [`escape_time`] if the difference matters.
pub fn iterate(px: f32, py: f32) -> u8 {
    escape_time(px, py).unwrap_or(0)
}

/// Map an iteration count to its ramp character.
pub fn shade(iterations: u8) -> u8 {
    RAMP[usize::from(iterations).min(RAMP.len() - 1)]
}

/// Visible window of the complex plane.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct View {
    pub center_x: f32,
    pub center_y: f32,
    /// Distance between two neighbouring sample points.
    pub scale: f32,
}

impl View {
    pub fn new() -> Self {
        Self {
            center_x: -0.5,
            center_y: 0.0,
            scale: 0.25,
        }
    }

    /// Render this view.
    pub fn frame(&self) -> Frame {
        Frame {
            view: *self,
            row: ROW_START,
            col: COL_START,
            trailer: 0,
        }
    }

    /// Pan and zoom for the next frame.
    pub fn advance(&mut self) {
        self.center_x += 0.175 * self.scale;
        self.center_y += 0.522 * self.scale;
        self.scale *= 0.875;
    }
}

impl Default for View {
    fn default() -> Self {
        Self::new()
    }
}

/// Byte stream of one rendered frame.
///
/// Rows are terminated with `'\n'`, the frame itself with `"\r\n"`.
pub struct Frame {
    view: View,
    row: i8,
    col: i8,
    trailer: usize,
}

impl Frame {
    fn sample(&self) -> u8 {
        let px = self.view.center_x + f32::from(self.row) * self.view.scale;
        let py = self.view.center_y + f32::from(self.col) * self.view.scale;
        shade(iterate(px, py))
    }
}

impl Iterator for Frame {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.row < ROW_END {
            if self.col < COL_END {
                let byte = self.sample();
                self.col += 1;
                return Some(byte);
            }
            self.col = COL_START;
            self.row += 1;
            return Some(b'\n');
        }

        let byte = FRAME_TRAILER.get(self.trailer).copied();
        if byte.is_some() {
            self.trailer += 1;
        }
        byte
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[test]
    fn test_origin_is_in_set() {
        assert_eq!(escape_time(0.0, 0.0), None);
        assert_eq!(iterate(0.0, 0.0), 0);
    }

    #[test]
    fn test_far_point_escapes_immediately() {
        // z1 = c, |c|² = 8
        assert_eq!(escape_time(2.0, 2.0), Some(1));
        assert_eq!(iterate(2.0, 2.0), 1);
    }

    #[rstest]
    #[case(-1.0, 0.0)]
    #[case(-0.5, 0.0)]
    #[case(0.0, 1.0)]
    fn test_bounded_points(#[case] px: f32, #[case] py: f32) {
        assert_eq!(escape_time(px, py), None);
        assert_eq!(iterate(px, py), 0);
    }

    #[rstest]
    #[case(-2.5, 0.0, 1)]
    #[case(1.0, 0.0, 3)]
    fn test_escaping_points(#[case] px: f32, #[case] py: f32, #[case] expected: u8) {
        assert_eq!(iterate(px, py), expected);
    }

    #[test]
    fn test_shade() {
        assert_eq!(shade(0), b' ');
        assert_eq!(shade(1), b'.');
        assert_eq!(shade(31), b'@');
        assert_eq!(shade(200), b'@');
    }

    #[test]
    fn test_frame_layout() {
        let frame: Vec<u8> = View::new().frame().collect();
        assert_eq!(frame.len(), FRAME_LEN);
        assert_eq!(frame.len(), 120 * 101 + 2);
        assert!(frame.ends_with(b"\n\r\n"));

        let rows: Vec<&[u8]> = frame[..frame.len() - 2].split(|b| *b == b'\n').collect();
        // 120 rows and the empty slice after the final newline
        assert_eq!(rows.len(), 121);
        assert!(rows[..120].iter().all(|row| row.len() == 100));
        assert!(frame.iter().all(|b| RAMP.contains(b) || *b == b'\n' || *b == b'\r'));
    }

    #[test]
    fn test_frame_samples() {
        let frame: Vec<u8> = View::new().frame().collect();
        // Row -60, column -50: c = (-15.5, -12.5) escapes at once
        assert_eq!(frame[0], b'.');
        // Row 0, column 0: c = (-0.5, 0) is inside the set
        assert_eq!(frame[60 * 101 + 50], b' ');
    }

    #[test]
    fn test_view_advance() {
        let mut view = View::new();
        view.advance();
        assert!((view.center_x - (-0.456_25)).abs() < 1e-6);
        assert!((view.center_y - 0.1305).abs() < 1e-6);
        assert!((view.scale - 0.218_75).abs() < 1e-6);

        view.advance();
        assert!((view.scale - 0.191_406_25).abs() < 1e-6);
    }
}
