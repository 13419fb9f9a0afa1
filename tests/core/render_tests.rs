//! Tests for scene construction, hover and tooltips

use circaview::render::{
    build_scene, effective_style, nearest_series, tooltip, HoverState, Palette, Scene,
};
use circaview::state::{
    MetricType, Sex, ViewState, ACTIVE_COLOR, DEFAULT_STROKE_WIDTH, DIMMED_OPACITY,
    EMPHASIS_STROKE_WIDTH, FEMALE_COLOR, HIGHLIGHT_COLOR, MALE_COLOR,
};
use circaview::view::{compute, Preset};

use crate::common::{constant_series, dataset, series, small_dataset};

fn scene_for(view: &ViewState) -> Scene {
    let derived = compute(&small_dataset(), view, &Preset::Standard.flags());
    build_scene(&derived, view, Palette::Category10)
}

// ============================================
// Styling
// ============================================

#[test]
fn test_sex_colours_when_both_visible() {
    let scene = scene_for(&ViewState::default());
    assert_eq!(scene.paths.len(), 8);
    for path in &scene.paths {
        let expected = match path.sex {
            Sex::Male => MALE_COLOR,
            Sex::Female => FEMALE_COLOR,
        };
        assert_eq!(path.stroke, expected, "path {}", path.id);
        assert_eq!(path.opacity, 1.0);
        assert_eq!(path.width, DEFAULT_STROKE_WIDTH);
    }
}

#[test]
fn test_categorical_colours_for_single_sex() {
    let view = ViewState {
        show_male: false,
        ..ViewState::default()
    };
    let scene = scene_for(&view);
    assert_eq!(scene.paths.len(), 4);
    for (slot, path) in scene.paths.iter().enumerate() {
        assert_eq!(path.sex, Sex::Female);
        assert_eq!(path.stroke, Palette::Category10.color_at(slot));
    }
}

#[test]
fn test_ten_subjects_get_ten_colours() {
    let data = dataset(constant_series(Sex::Male, 10, 5, 36.0), vec![]);
    for palette in [Palette::Category10, Palette::ColorBlind] {
        let view = ViewState {
            show_female: false,
            ..ViewState::default()
        };
        let scene = build_scene(
            &compute(&data, &view, &Preset::Standard.flags()),
            &view,
            palette,
        );
        let mut strokes: Vec<[u8; 3]> = scene.paths.iter().map(|p| p.stroke).collect();
        strokes.sort();
        strokes.dedup();
        assert_eq!(strokes.len(), 10, "{:?}", palette);
    }
}

#[test]
fn test_colour_follows_dataset_position_not_cap() {
    let data = dataset(constant_series(Sex::Male, 7, 5, 36.0), vec![]);
    let view = ViewState {
        show_female: false,
        ..ViewState::default()
    };
    let all = build_scene(
        &compute(&data, &view, &Preset::Standard.flags()),
        &view,
        Palette::Category10,
    );
    let capped = build_scene(
        &compute(&data, &view, &Preset::LineCapped.flags()),
        &view,
        Palette::Category10,
    );
    assert_eq!(capped.paths.len(), 5);
    for path in &capped.paths {
        assert_eq!(Some(path.stroke), all.path(&path.id).map(|p| p.stroke));
    }
}

#[test]
fn test_highlight_is_red_opaque_and_on_top() {
    let view = ViewState {
        highlight_id: Some("m3".into()),
        ..ViewState::default()
    };
    let scene = scene_for(&view);

    let red: Vec<_> = scene
        .paths
        .iter()
        .filter(|p| p.stroke == HIGHLIGHT_COLOR)
        .collect();
    assert_eq!(red.len(), 1);
    assert_eq!(red[0].id, "m3");
    assert_eq!(red[0].opacity, 1.0);
    assert_eq!(red[0].width, EMPHASIS_STROKE_WIDTH);

    assert_eq!(scene.paths.last().map(|p| p.id.as_str()), Some("m3"));
    for path in scene.paths.iter().filter(|p| p.id != "m3") {
        assert_eq!(path.opacity, DIMMED_OPACITY);
        assert!(!path.highlighted);
    }
}

#[test]
fn test_unknown_highlight_dims_everything() {
    let view = ViewState {
        highlight_id: Some("x99".into()),
        ..ViewState::default()
    };
    let scene = scene_for(&view);
    assert!(scene.paths.iter().all(|p| p.opacity == DIMMED_OPACITY));
    assert!(scene.paths.iter().all(|p| p.stroke != HIGHLIGHT_COLOR));
}

#[test]
fn test_empty_scene_when_no_sex_selected() {
    let view = ViewState {
        show_male: false,
        show_female: false,
        ..ViewState::default()
    };
    let scene = scene_for(&view);
    assert!(scene.is_empty());
    assert_eq!(scene.y_bounds, None);
}

#[test]
fn test_new_scene_replaces_old_paths() {
    let data = dataset(
        vec![series("m1", Sex::Male, &[Some(36.0), Some(36.5)])],
        vec![series("f1", Sex::Female, &[Some(37.0), Some(37.5)])],
    );
    let flags = Preset::Standard.flags();

    let view = ViewState::default();
    let before = build_scene(&compute(&data, &view, &flags), &view, Palette::Category10);
    assert!(before.path("f1").is_some());

    let view = ViewState {
        show_female: false,
        metric: MetricType::Activity,
        ..view
    };
    let after = build_scene(&compute(&data, &view, &flags), &view, Palette::Category10);
    assert!(after.path("f1").is_none());
    assert_eq!(after.paths.len(), 1);
}

#[test]
fn test_missing_values_break_the_line() {
    let data = dataset(
        vec![series("m1", Sex::Male, &[Some(1.0), Some(2.0), None, Some(4.0)])],
        vec![],
    );
    let view = ViewState::default();
    let scene = build_scene(
        &compute(&data, &view, &Preset::Standard.flags()),
        &view,
        Palette::Category10,
    );
    let path = scene.path("m1").expect("m1 drawn");
    assert_eq!(
        path.segments,
        vec![vec![[0.0, 1.0], [1.0, 2.0]], vec![[3.0, 4.0]]]
    );
}

// ============================================
// Hover
// ============================================

#[test]
fn test_hover_emphasis_and_tooltip() {
    let scene = scene_for(&ViewState::default());
    let path = scene.path("f2").expect("f2 drawn");

    let mut hover = HoverState::default();
    hover.enter(Some("f2".into()), [10.0, 37.5]);
    assert_eq!(effective_style(path, &hover), (ACTIVE_COLOR, EMPHASIS_STROKE_WIDTH));

    let tip = tooltip(&hover).expect("tooltip while hovering");
    assert_eq!(tip.text, "Mouse: f2");
    assert_eq!(tip.at, [10.0, 37.5]);

    hover.leave();
    assert_eq!(effective_style(path, &hover), (FEMALE_COLOR, DEFAULT_STROKE_WIDTH));
    assert_eq!(tooltip(&hover), None);
}

#[test]
fn test_hover_keeps_highlight_after_leaving() {
    let view = ViewState {
        highlight_id: Some("m1".into()),
        ..ViewState::default()
    };
    let scene = scene_for(&view);
    let path = scene.path("m1").expect("m1 drawn");

    let mut hover = HoverState::default();
    hover.enter(Some("m1".into()), [0.0, 0.0]);
    hover.leave();
    assert_eq!(effective_style(path, &hover), (HIGHLIGHT_COLOR, EMPHASIS_STROKE_WIDTH));
}

#[test]
fn test_nearest_series_within_tolerance() {
    let data = dataset(
        vec![series("m1", Sex::Male, &[Some(36.0); 10])],
        vec![series("f1", Sex::Female, &[Some(37.0); 10])],
    );
    let view = ViewState::default();
    let scene = build_scene(
        &compute(&data, &view, &Preset::Standard.flags()),
        &view,
        Palette::Category10,
    );

    assert_eq!(nearest_series(&scene, [4.5, 36.05], 0.1), Some("m1"));
    assert_eq!(nearest_series(&scene, [4.5, 36.96], 0.1), Some("f1"));
    assert_eq!(nearest_series(&scene, [4.5, 36.5], 0.1), None);
    assert_eq!(nearest_series(&scene, [20.0, 36.0], 0.1), None);
}
