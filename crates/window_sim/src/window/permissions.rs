//! Window capability flags

use bitflags::bitflags;

bitflags! {
    /// What the user may do to a window through pointer interaction
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Permissions: u8 {
        /// Banner shows a close glyph that schedules destruction
        const CLOSE = 1;
        /// Window follows the pointer while dragged
        const MOVE = 2;
        /// Left/right edges can be dragged
        const RESIZE_X = 4;
        /// Top/bottom edges can be dragged
        const RESIZE_Y = 8;
        /// Both resize axes
        const RESIZE = Self::RESIZE_X.bits() | Self::RESIZE_Y.bits();
    }
}

impl Default for Permissions {
    fn default() -> Self {
        Self::all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_grants_everything() {
        let permissions = Permissions::default();
        assert!(permissions.contains(Permissions::CLOSE | Permissions::MOVE | Permissions::RESIZE));
    }

    #[test]
    fn test_bits_match_host_bitmask() {
        assert_eq!(Permissions::from_bits_truncate(0b0101), Permissions::CLOSE | Permissions::RESIZE_X);
        assert!(Permissions::RESIZE_Y.intersects(Permissions::RESIZE));
        assert!(!Permissions::MOVE.intersects(Permissions::RESIZE));
    }
}
