use gpui::*;
use gpui_component::Root;
use mongolens::app::AppRoot;

fn main() {
    env_logger::init();

    Application::new().with_assets(gpui_component_assets::Assets).run(|cx: &mut gpui::App| {
        // Initialize gpui-component library
        gpui_component::init(cx);

        let default_bounds = Bounds::centered(None, size(px(1100.0), px(760.0)), cx);

        cx.open_window(
            WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(default_bounds)),
                titlebar: Some(TitlebarOptions {
                    title: Some("MongoLens".into()),
                    ..Default::default()
                }),
                ..Default::default()
            },
            |window, cx| {
                // Quit the app when the window is closed
                window.on_window_should_close(cx, |_window, cx| {
                    cx.quit();
                    true
                });

                let app_view = cx.new(|cx| AppRoot::new(window, cx));
                cx.new(|cx| Root::new(app_view, window, cx))
            },
        )
        .unwrap();
    });
}
