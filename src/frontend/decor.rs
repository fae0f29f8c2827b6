use web_sys::Element;
use yew::prelude::*;

use super::dom::{scroll_y, viewport_size, watch_scroll};
use crate::decor::{
    horizontal_progress, horizontal_section_style, horizontal_track_style, noise_style,
    parallax_style,
};
use crate::selectors::NOISE_OVERLAY_CLASS;

#[derive(Properties, PartialEq)]
pub struct ParallaxProps {
    /// Fraction of the scroll distance the layer moves; negative moves it up.
    pub speed: f64,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(Parallax)]
pub fn parallax(props: &ParallaxProps) -> Html {
    let layer = use_node_ref();

    {
        let layer = layer.clone();
        use_effect_with(props.speed, move |speed| {
            let speed = *speed;
            let watch = watch_scroll(move || {
                if let Some(element) = layer.cast::<Element>() {
                    let _ = element.set_attribute("style", &parallax_style(scroll_y(), speed));
                }
            });
            move || drop(watch)
        });
    }

    html! {
        <div ref={layer} class={classes!("parallax-layer", props.class.clone())}>
            {props.children.clone()}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct HorizontalScrollProps {
    /// Full width of the sliding track in pixels.
    pub track_width: f64,
    #[prop_or_default]
    pub children: Html,
}

/// Pins its children and slides them sideways while the page scrolls
/// vertically through the section.
#[function_component(HorizontalScroll)]
pub fn horizontal_scroll(props: &HorizontalScrollProps) -> Html {
    let section = use_node_ref();
    let track = use_node_ref();

    {
        let section = section.clone();
        let track = track.clone();
        use_effect_with(props.track_width, move |track_width| {
            let track_width = *track_width;
            let watch = watch_scroll(move || {
                let (Some(section), Some(track)) = (section.cast::<Element>(), track.cast::<Element>())
                else {
                    return;
                };
                let (viewport_width, viewport_height) = viewport_size();
                let _ = section.set_attribute(
                    "style",
                    &horizontal_section_style(track_width, viewport_width, viewport_height),
                );

                let current_scroll = scroll_y();
                let rect = section.get_bounding_client_rect();
                let progress = horizontal_progress(
                    current_scroll,
                    current_scroll + rect.top(),
                    rect.height(),
                    viewport_height,
                );
                let _ = track.set_attribute(
                    "style",
                    &horizontal_track_style(progress, track_width, viewport_width),
                );
            });
            move || drop(watch)
        });
    }

    let track_style = format!("width: {:.0}px;", props.track_width);

    html! {
        <div ref={section} class="horizontal-scroll">
            <div class="horizontal-scroll-sticky">
                <div class="horizontal-scroll-frame" style={track_style}>
                    <div ref={track} class="horizontal-scroll-track">
                        {props.children.clone()}
                    </div>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct NoiseOverlayProps {
    #[prop_or(0.06)]
    pub opacity: f64,
}

#[function_component(NoiseOverlay)]
pub fn noise_overlay(props: &NoiseOverlayProps) -> Html {
    html! {
        <div class={NOISE_OVERLAY_CLASS} style={noise_style(props.opacity)} aria-hidden="true"></div>
    }
}

#[cfg(test)]
mod tests {
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::wasm_bindgen_test;
    use web_sys::window;

    use super::*;
    use crate::frontend::test_support::{dispatch, mount_root, next_frame};

    #[wasm_bindgen_test]
    async fn horizontal_section_height_is_set_from_live_viewport() {
        let root = mount_root();
        let app = yew::Renderer::<HorizontalScroll>::with_root_and_props(
            root.clone(),
            HorizontalScrollProps {
                track_width: 5_000.0,
                children: Html::default(),
            },
        )
        .render();

        TimeoutFuture::new(10).await;
        next_frame().await;

        let section = root
            .query_selector(".horizontal-scroll")
            .expect("valid selector")
            .expect("section rendered");
        let (viewport_width, viewport_height) = viewport_size();
        let expected = horizontal_section_style(5_000.0, viewport_width, viewport_height);
        assert_eq!(section.get_attribute("style").as_deref(), Some(expected.as_str()));

        section.set_attribute("style", "height: 1px;").expect("reset height");
        dispatch(&window().expect("window"), "resize");
        next_frame().await;
        assert_eq!(section.get_attribute("style").as_deref(), Some(expected.as_str()));

        app.destroy();
        root.remove();
    }
}
