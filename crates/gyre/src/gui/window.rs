use gtk4 as gtk;
use gtk4_layer_shell::{KeyboardMode, Layer, LayerShell};
use gyre_core::config::ShellLayer;

/// Places the window on a layer-shell layer, centered with no anchors.
pub fn init_layer_shell(window: &gtk::ApplicationWindow, layer: ShellLayer) {
    window.init_layer_shell();
    window.set_layer(match layer {
        ShellLayer::Background => Layer::Background,
        ShellLayer::Bottom => Layer::Bottom,
        ShellLayer::Top => Layer::Top,
        ShellLayer::Overlay => Layer::Overlay,
    });
    window.set_namespace(Some("gyre"));
    window.set_exclusive_zone(-1);
    window.set_keyboard_mode(KeyboardMode::None);
}
