//! Drop surface handling.
//!
//! Every drag event that reaches the surface has its default action
//! suppressed. An unhandled `drop` makes the browser open the file and
//! leave the page.

use crate::view::WidgetView;

/// Native drag sequence, reduced to what the widget needs.
#[derive(Clone, Debug, PartialEq)]
pub enum DragPhase<F> {
    Enter,
    Over,
    Leave,
    /// Files carried by the drop, in transfer order.
    Drop(Vec<F>),
}

/// What the caller must do with the native event.
#[derive(Clone, Debug, PartialEq)]
pub struct DragResponse<F> {
    /// Call `preventDefault()` and `stopPropagation()`. Always true.
    pub prevent_default: bool,
    /// First dropped file, to hand to the gate.
    pub forwarded: Option<F>,
}

/// Highlight state of the drop surface.
#[derive(Debug, Default)]
pub struct DragZone {
    highlighted: bool,
}

impl DragZone {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    pub fn handle<F, V: WidgetView>(&mut self, phase: DragPhase<F>, view: &mut V) -> DragResponse<F> {
        let forwarded = match phase {
            DragPhase::Enter | DragPhase::Over => {
                self.set_highlighted(true, view);
                None
            }
            DragPhase::Leave => {
                self.set_highlighted(false, view);
                None
            }
            DragPhase::Drop(files) => {
                self.set_highlighted(false, view);
                if files.len() > 1 {
                    log::debug!("Ignoring {} extra dropped files", files.len() - 1);
                }
                files.into_iter().next()
            }
        };

        DragResponse {
            prevent_default: true,
            forwarded,
        }
    }

    fn set_highlighted<V: WidgetView>(&mut self, highlighted: bool, view: &mut V) {
        self.highlighted = highlighted;
        view.set_highlighted(highlighted);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file::LocalFile;
    use crate::view::RecordingView;

    fn csv(name: &str) -> LocalFile {
        LocalFile::new(name, b"a,b\n1,2\n".to_vec())
    }

    #[test]
    fn test_enter_then_leave_unhighlights() {
        let mut zone = DragZone::new();
        let mut view = RecordingView::default();

        zone.handle::<LocalFile, _>(DragPhase::Enter, &mut view);
        assert!(view.highlighted);
        zone.handle::<LocalFile, _>(DragPhase::Over, &mut view);
        assert!(zone.is_highlighted());

        zone.handle::<LocalFile, _>(DragPhase::Leave, &mut view);
        assert!(!view.highlighted);
        assert!(!zone.is_highlighted());
    }

    #[test]
    fn test_every_phase_suppresses_default() {
        let mut zone = DragZone::new();
        let mut view = RecordingView::default();

        let phases = vec![
            DragPhase::Enter,
            DragPhase::Over,
            DragPhase::Leave,
            DragPhase::Drop(vec![]),
            DragPhase::Drop(vec![csv("photo.png")]),
        ];
        for phase in phases {
            assert!(zone.handle(phase, &mut view).prevent_default);
        }
    }

    #[test]
    fn test_drop_forwards_first_file_only() {
        let mut zone = DragZone::new();
        let mut view = RecordingView::default();

        zone.handle::<LocalFile, _>(DragPhase::Enter, &mut view);
        let response = zone.handle(
            DragPhase::Drop(vec![csv("first.csv"), csv("second.csv")]),
            &mut view,
        );

        assert_eq!(response.forwarded, Some(csv("first.csv")));
        assert!(!view.highlighted);
    }

    #[test]
    fn test_empty_drop_forwards_nothing() {
        let mut zone = DragZone::new();
        let mut view = RecordingView::default();

        let response = zone.handle::<LocalFile, _>(DragPhase::Drop(vec![]), &mut view);
        assert!(response.forwarded.is_none());
    }
}
