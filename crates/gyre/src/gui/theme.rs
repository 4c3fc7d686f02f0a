use gtk::gdk;
use gtk4 as gtk;
use gyre_core::Color;

/// Registers the app stylesheet for the default display.
pub fn install_css(background: &Color) -> gtk::CssProvider {
    let provider = gtk::CssProvider::new();
    set_background(&provider, background);

    if let Some(display) = gdk::Display::default() {
        gtk::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
    provider
}

/// Paints the window in the ring's background so the area outside the
/// canvas matches what the clear pass overpaints with.
pub fn set_background(provider: &gtk::CssProvider, background: &Color) {
    let css_data = format!(
        "
.gyre-window {{
    background-color: {background};
}}
.gyre-drawing-area {{
    background: none;
    background-color: transparent;
}}
"
    );
    provider.load_from_data(&css_data);
}
