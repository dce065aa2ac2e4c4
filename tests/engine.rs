mod common;

use itertools::Itertools;
use test_case::test_case;

use common::{BlockGlyphs, BoxGlyphs, CenterPlacer, EjectNudger, ZeroNudger, strategies, word};
use wordnest::canvas::{Canvas, Compositing};
use wordnest::config::RenderOptions;
use wordnest::engine::{CloudEngine, attempt_budget};
use wordnest::entities::PlacementStatus;
use wordnest::geometry::geo_traits::CollidesWith;
use wordnest::strategies::{SpiralNudger, WavePlacer, WeightSizer};

fn canvas_400() -> Canvas {
    Canvas::try_new(400.0, 400.0, Compositing::Vector).unwrap()
}

#[test_case(1.0 => 100)]
#[test_case(0.5 => 400)]
#[test_case(0.0 => 700)]
fn weight_derived_attempt_budget(weight: f32) -> usize {
    attempt_budget(weight)
}

#[test]
fn attempt_budget_never_rewards_low_weight() {
    let budgets = (0..=20).map(|i| attempt_budget(i as f32 / 20.0)).collect_vec();
    for pair in budgets.windows(2) {
        assert!(pair[1] <= pair[0], "budget grew with weight: {budgets:?}");
    }
    assert!(budgets.iter().all(|&b| b >= 100));
}

#[test]
fn bitmap_canvas_is_rejected_at_construction() {
    let canvas = Canvas::try_new(400.0, 400.0, Compositing::Bitmap).unwrap();
    let result = CloudEngine::new(
        canvas,
        vec![word("hello", 1.0)],
        strategies(Box::new(CenterPlacer), Box::new(SpiralNudger)),
        &BlockGlyphs,
        RenderOptions::default(),
    );
    assert!(result.is_err());
}

#[test]
fn two_center_words_never_overlap() {
    let words = vec![word("heavyweight", 1.0), word("featherweight", 0.1)];
    let mut engine = CloudEngine::new(
        canvas_400(),
        words,
        strategies(Box::new(CenterPlacer), Box::new(SpiralNudger)),
        &BlockGlyphs,
        RenderOptions::default(),
    )
    .unwrap();

    engine.advance_all();

    let records = engine.records();
    assert_eq!(records[0].status, PlacementStatus::Placed);

    //rank 0 sits exactly where the placer asked: the canvas center
    let r0 = &records[0];
    let bbox = r0.posed.as_ref().unwrap().bbox;
    assert_eq!(bbox.centroid().x().round(), 200.0);
    assert_eq!(bbox.centroid().y().round(), 200.0);

    //rank 1 was nudged away and must not overlap, or was skipped
    match records[1].status {
        PlacementStatus::Placed => assert!(!records[1].overlaps(&records[0])),
        PlacementStatus::Skipped => assert_eq!(engine.skipped_words().len(), 1),
        PlacementStatus::Pending => panic!("word left unprocessed"),
    }
}

#[test]
fn colliding_word_without_escape_is_skipped_via_cache() {
    //both words demand the center and the nudger never moves them:
    //the full scan runs once, every further attempt dies in the cache
    let words = vec![word("anchor", 1.0), word("blocked", 0.1)];
    let mut engine = CloudEngine::new(
        canvas_400(),
        words,
        strategies(Box::new(CenterPlacer), Box::new(ZeroNudger)),
        &BlockGlyphs,
        RenderOptions::default(),
    )
    .unwrap();

    engine.advance_all();

    let stats = engine.stats();
    let budget = attempt_budget(0.1);
    assert_eq!(engine.records()[1].status, PlacementStatus::Skipped);
    assert_eq!(stats.scan_collisions, 1);
    assert_eq!(stats.cache_collisions, budget - 1);
    assert_eq!(engine.skipped_words(), &[word("blocked", 0.1)]);
}

#[test]
fn placed_words_stay_disjoint_and_in_bounds() {
    let words = [
        ("collision", 1.0),
        ("placement", 0.9),
        ("geometry", 0.8),
        ("outline", 0.65),
        ("canvas", 0.5),
        ("nudge", 0.35),
        ("rank", 0.2),
        ("weight", 0.1),
    ]
    .map(|(t, w)| word(t, w));

    let mut engine = CloudEngine::new(
        canvas_400(),
        words.to_vec(),
        strategies(Box::new(WavePlacer), Box::new(SpiralNudger)),
        &BlockGlyphs,
        RenderOptions::default(),
    )
    .unwrap();

    engine.advance_all();

    //every word reached a terminal status
    assert!(!engine.has_more());
    assert!(engine.records().iter().all(|r| r.is_terminal()));
    assert_eq!(engine.progress(), 1.0);

    let placed = engine.placed().collect_vec();
    assert!(!placed.is_empty());

    for p in &placed {
        let bbox = p.outline.bbox;
        assert!(bbox.x_min >= 0.0 && bbox.y_min >= 0.0);
        assert!(bbox.x_max < 400.0 && bbox.y_max < 400.0);
    }
    for (a, b) in placed.iter().tuple_combinations() {
        assert!(
            !a.outline.collides_with(b.outline),
            "{} overlaps {}",
            a.word,
            b.word
        );
    }
}

#[test]
fn too_small_word_is_skipped_without_any_attempt() {
    let mut engine = CloudEngine::new(
        canvas_400(),
        vec![word("dot", 0.8)],
        strategies(Box::new(CenterPlacer), Box::new(SpiralNudger)),
        &BoxGlyphs::sized(3.0, 3.0),
        RenderOptions::default(),
    )
    .unwrap();

    assert!(!engine.has_more());
    assert_eq!(engine.records()[0].status, PlacementStatus::Skipped);
    assert_eq!(engine.skipped_words(), &[word("dot", 0.8)]);
    assert_eq!(engine.progress(), 1.0);

    engine.advance_all();
    //no placement attempt was ever made
    assert_eq!(engine.stats().rejected_attempts(), 0);
    assert_eq!(engine.stats().words_placed, 0);
}

#[test]
fn word_cap_skips_the_rest_without_shaping() {
    let words = vec![
        word("one", 1.0),
        word("two", 0.8),
        word("three", 0.6),
        word("four", 0.4),
        word("five", 0.2),
    ];
    let options = RenderOptions {
        max_words: Some(2),
        ..RenderOptions::default()
    };
    let mut engine = CloudEngine::new(
        canvas_400(),
        words,
        strategies(Box::new(CenterPlacer), Box::new(SpiralNudger)),
        &BlockGlyphs,
        options,
    )
    .unwrap();

    assert_eq!(engine.records().len(), 2);
    //over-the-cap words are reported immediately, in original input order
    assert_eq!(
        engine.skipped_words(),
        &[word("three", 0.6), word("four", 0.4), word("five", 0.2)]
    );

    engine.advance_all();
    assert_eq!(engine.stats().words_placed, 2);
    assert_eq!(engine.skipped_words().len(), 3);
}

#[test]
fn attempt_override_caps_the_search() {
    let options = RenderOptions {
        max_attempts: Some(3),
        ..RenderOptions::default()
    };
    let mut engine = CloudEngine::new(
        canvas_400(),
        vec![word("ejected", 1.0)],
        strategies(Box::new(CenterPlacer), Box::new(EjectNudger)),
        &BlockGlyphs,
        options,
    )
    .unwrap();

    engine.advance_all();

    assert_eq!(engine.stats().out_of_bounds, 3);
    assert_eq!(engine.records()[0].status, PlacementStatus::Skipped);
}

#[test]
fn stepping_advances_one_word_at_a_time() {
    let words = vec![word("first", 1.0), word("second", 0.5)];
    let mut engine = CloudEngine::new(
        canvas_400(),
        words,
        strategies(Box::new(WavePlacer), Box::new(SpiralNudger)),
        &BlockGlyphs,
        RenderOptions::default(),
    )
    .unwrap();

    assert_eq!(engine.progress(), 0.0);
    assert!(engine.has_more());

    engine.advance_one();
    assert_eq!(engine.progress(), 0.5);
    assert!(engine.has_more());

    engine.advance_one();
    assert_eq!(engine.progress(), 1.0);
    assert!(!engine.has_more());

    //advancing past the end is a no-op
    engine.advance_one();
    assert_eq!(engine.progress(), 1.0);
}

#[test]
fn word_query_follows_the_exact_outline() {
    //"hi" at size 20: two 12-wide glyph boxes with a 2-unit gap, centered on
    //the canvas: glyphs span x [187, 199] and [201, 213], y [190, 210]
    let mut strategy_set = strategies(Box::new(CenterPlacer), Box::new(SpiralNudger));
    strategy_set.sizer = Box::new(WeightSizer {
        min: 20.0,
        max: 20.0,
    });

    let mut engine = CloudEngine::new(
        canvas_400(),
        vec![word("hi", 0.6)],
        strategy_set,
        &BlockGlyphs,
        RenderOptions::default(),
    )
    .unwrap();

    engine.advance_all();
    assert_eq!(engine.stats().words_placed, 1);

    //inside the first glyph box
    assert_eq!(
        engine.word_at(190.0, 200.0).map(|w| w.text.as_str()),
        Some("hi")
    );
    //between the glyphs: inside the bounding box but outside the outline
    assert!(engine.word_at(200.0, 200.0).is_none());
    //nowhere near the word
    assert!(engine.word_at(50.0, 50.0).is_none());
}

#[test]
fn svg_export_emits_one_path_per_placed_word() {
    let words = vec![word("alpha", 1.0), word("beta", 0.5)];
    let mut engine = CloudEngine::new(
        canvas_400(),
        words,
        strategies(Box::new(WavePlacer), Box::new(SpiralNudger)),
        &BlockGlyphs,
        RenderOptions::default(),
    )
    .unwrap();
    engine.advance_all();

    let rendered = wordnest::io::cloud_to_svg(&engine, "demo").to_string();
    assert_eq!(
        rendered.matches("<path").count(),
        engine.stats().words_placed
    );
}

#[test]
fn render_options_deserialize_from_empty_object() {
    let options: RenderOptions = serde_json::from_str("{}").unwrap();
    assert_eq!(options.max_words, None);
    assert_eq!(options.max_attempts, None);
    assert!(!options.log_skipped);
}
