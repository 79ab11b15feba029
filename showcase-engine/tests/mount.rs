mod common;

use std::cell::Cell;

use common::*;
use showcase_engine::{Carousel, ShowcaseError, ShowcaseSpec, Tuning, parse_manifest};

fn spec(container: &str, images: &[&str]) -> ShowcaseSpec {
    ShowcaseSpec::new(container, urls(images), true)
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
#[test]
fn missing_container_aborts_quietly() {
    init_logs();
    let looked_up = Cell::new(None);

    let result = TestCarousel::mount(&spec("no-such-element", &["a.png"]), |id, _| {
        looked_up.set(Some(id.to_owned()));
        Ok(None)
    });

    assert!(matches!(result, Err(ShowcaseError::MountNotFound(id)) if id == "no-such-element"));
    assert_eq!(looked_up.take().as_deref(), Some("no-such-element"));
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
#[test]
fn mount_builds_inside_found_container() {
    init_logs();
    let c = Carousel::mount(&spec("threejs-background-2", &["1.png", "2.png"]), |id, layout| {
        assert_eq!(id, "threejs-background-2");
        assert_eq!(layout.spacing, 4.0);
        Ok(Some((RecordingStage::sized(600, 400), QueuedLoader::default())))
    })
    .unwrap();

    assert_eq!(c.name(), "threejs-background-2");
    assert_eq!(c.stage().output_size, Some((600, 400)));
    assert_eq!(c.stage().screens.len(), 3);
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
#[test]
fn bad_spec_fails_before_touching_the_page() {
    init_logs();
    let attached = Cell::new(false);

    let mut bad = spec("threejs-background-1", &["a.png"]);
    bad.tuning = Tuning { duration_ms: 0.0, ..Tuning::default() };
    let result = TestCarousel::mount(&bad, |_, _| {
        attached.set(true);
        Ok(Some((RecordingStage::default(), QueuedLoader::default())))
    });
    assert!(matches!(result, Err(ShowcaseError::InvalidTuning(_))));
    assert!(!attached.get());
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
#[test]
fn empty_gallery_is_rejected() {
    init_logs();
    let attached = Cell::new(false);

    let result = TestCarousel::mount(&spec("threejs-background-1", &[]), |_, _| {
        attached.set(true);
        Ok(Some((RecordingStage::sized(10, 10), QueuedLoader::default())))
    });
    assert!(matches!(result, Err(ShowcaseError::EmptyImageList(id)) if id == "threejs-background-1"));
    assert!(!attached.get(), "no canvas should be built for an empty gallery");
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
#[test]
fn one_bad_entry_does_not_stop_the_rest() {
    init_logs();
    let specs = parse_manifest(
        r#"[
            { "container": "threejs-background-1", "images": ["t1.png", "t2.png", "t3.png"] },
            { "container": "gone", "images": ["x.png"] },
            { "container": "threejs-background-3", "images": ["chord.png"], "sliding": false }
        ]"#,
    )
    .unwrap();

    let mounted: Vec<_> = specs
        .iter()
        .filter_map(|spec| {
            TestCarousel::mount(spec, |id, _| {
                Ok((id != "gone").then(|| (RecordingStage::sized(800, 450), QueuedLoader::default())))
            })
            .ok()
        })
        .collect();

    let names: Vec<_> = mounted.iter().map(|c| c.name()).collect();
    assert_eq!(names, ["threejs-background-1", "threejs-background-3"]);
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
#[test]
fn renderer_failure_skips_only_that_entry() {
    init_logs();
    let specs = [
        spec("threejs-background-1", &["a.png"]),
        spec("threejs-background-2", &["b.png"]),
        spec("threejs-background-3", &["c.png"]),
    ];

    let mut attempts = Vec::new();
    let mounted: Vec<_> = specs
        .iter()
        .filter_map(|spec| {
            TestCarousel::mount(spec, |id, _| {
                attempts.push(id.to_owned());
                if id == "threejs-background-2" {
                    return Err(ShowcaseError::Js("Error creating WebGL context.".into()));
                }
                Ok(Some((RecordingStage::sized(800, 450), QueuedLoader::default())))
            })
            .ok()
        })
        .collect();

    assert_eq!(attempts.len(), 3);
    let names: Vec<_> = mounted.iter().map(|c| c.name()).collect();
    assert_eq!(names, ["threejs-background-1", "threejs-background-3"]);
}
