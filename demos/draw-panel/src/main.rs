use dpi::LogicalSize;
use sketch_winit::{AppLauncher, LaunchError, WindowAttributes};

mod panel;
use panel::*;

fn main() -> Result<(), LaunchError> {
    AppLauncher::builder()
        .painter(DrawPanel)
        .window(panel_window_attributes())
        .build()
        .run()
}

fn panel_window_attributes() -> WindowAttributes {
    WindowAttributes::default()
        .with_title(PANEL_TITLE)
        .with_inner_size(LogicalSize::new(PANEL_SIZE.width, PANEL_SIZE.height))
        .with_visible(true)
}

#[cfg(test)]
mod tests {
    use dpi::Size;

    use super::*;

    #[test]
    fn window_is_titled_visible_and_300_square() {
        let attributes = panel_window_attributes();
        assert_eq!(attributes.title, "Draw Panel");
        assert!(attributes.visible);
        assert_eq!(
            attributes.inner_size,
            Some(Size::Logical(LogicalSize::new(300.0, 300.0)))
        );
    }
}
