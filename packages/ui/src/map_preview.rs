use dioxus::prelude::*;
use registration::{Coordinate, MapView};

const MAP_CSS: Asset = asset!("/assets/styling/map.css");

/// Tile map centred on `center` with a single marker and zoom buttons.
///
/// The zoom chosen by the user survives a new capture; the centre follows it.
#[component]
pub fn MapPreview(center: Coordinate, zoom: u8, tile_url: String) -> Element {
    let mut current_zoom = use_signal(move || zoom);

    let view = MapView::new(center, current_zoom(), tile_url);
    let (marker_x, marker_y) = view.marker_offset();
    let tiles = view.tiles();

    let zoom_in_to = {
        let mut v = view.clone();
        v.zoom_in();
        v.zoom()
    };
    let zoom_out_to = {
        let mut v = view.clone();
        v.zoom_out();
        v.zoom()
    };

    rsx! {
        document::Stylesheet { href: MAP_CSS }

        div {
            class: "map-container",
            div {
                class: "map-grid",
                style: "left: calc(50% - {marker_x}px); top: calc(50% - {marker_y}px);",
                for tile in tiles {
                    img {
                        key: "{tile.z}/{tile.x}/{tile.y}",
                        class: "map-tile",
                        src: "{tile.url}",
                        alt: "",
                        draggable: "false",
                        style: "left: {tile.left}px; top: {tile.top}px;",
                    }
                }
                div {
                    class: "map-marker",
                    style: "left: {marker_x}px; top: {marker_y}px;",
                    title: "{center}",
                }
            }
            div {
                class: "map-zoom",
                button {
                    r#type: "button",
                    title: "Zoom in",
                    disabled: zoom_in_to == view.zoom(),
                    onclick: move |_| current_zoom.set(zoom_in_to),
                    "+"
                }
                button {
                    r#type: "button",
                    title: "Zoom out",
                    disabled: zoom_out_to == view.zoom(),
                    onclick: move |_| current_zoom.set(zoom_out_to),
                    "−"
                }
            }
            div {
                class: "map-attribution",
                "© OpenStreetMap contributors"
            }
        }
    }
}
