use termfolio_protocol::{
    Point, Rect, RenderCommand, TextAlign, TextEmphasis, ThemeToken, Viewport,
};

/// Fixed duration of the loading gate before first content paint.
pub const DURATION_SECS: f64 = 2.0;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const BAR_WIDTH: f64 = 24.0;

/// The loading splash, in screen coordinates over the whole terminal.
pub fn render(name: &str, viewport: &Viewport, elapsed: f64) -> Vec<RenderCommand> {
    let cx = viewport.width / 2.0;
    let cy = (viewport.height / 2.0 - 2.0).max(0.0).floor();

    let frame = SPINNER[((elapsed * 10.0) as usize) % SPINNER.len()];
    let progress = (elapsed / DURATION_SECS).clamp(0.0, 1.0);

    let mut out = Vec::with_capacity(6);
    out.push(RenderCommand::BeginGroup {
        id: "splash".into(),
    });
    out.push(RenderCommand::DrawText {
        position: Point::new(cx, cy),
        text: frame.into(),
        color: ThemeToken::SplashSpinner,
        align: TextAlign::Center,
        emphasis: TextEmphasis::Bold,
    });
    out.push(RenderCommand::DrawText {
        position: Point::new(cx, cy + 2.0),
        text: name.into(),
        color: ThemeToken::Accent,
        align: TextAlign::Center,
        emphasis: TextEmphasis::Bold,
    });
    out.push(RenderCommand::DrawText {
        position: Point::new(cx, cy + 3.0),
        text: "Loading portfolio…".into(),
        color: ThemeToken::TextMuted,
        align: TextAlign::Center,
        emphasis: TextEmphasis::Dim,
    });

    let bar_x = (cx - BAR_WIDTH / 2.0).max(0.0).floor();
    out.push(RenderCommand::DrawRect {
        rect: Rect::new(bar_x, cy + 5.0, BAR_WIDTH, 1.0),
        color: ThemeToken::GaugeTrack,
        border_color: None,
    });
    let fill = (BAR_WIDTH * progress).floor();
    if fill >= 1.0 {
        out.push(RenderCommand::DrawRect {
            rect: Rect::new(bar_x, cy + 5.0, fill, 1.0),
            color: ThemeToken::GaugeFill,
            border_color: None,
        });
    }
    out.push(RenderCommand::EndGroup);
    out
}
