//! Keystroke-level tests for the calculator engine
//!
//! Each test drives the engine only through key presses and the display
//! snapshot, the way a shell does.

#![allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable

use rpn_calc::{parse_keys, AngleUnit, CalcEngine, Cell, EngineConfig, UnaryPolicy};

const EPS: f64 = 1e-9;

fn run(keys: &str) -> CalcEngine {
    run_with(EngineConfig::default(), keys)
}

fn run_with(config: EngineConfig, keys: &str) -> CalcEngine {
    let mut engine = CalcEngine::new(config);
    engine.handle_buttons(parse_keys(keys).unwrap());
    engine
}

#[test]
fn typed_digits_commit_to_their_decimal_value() {
    for (keys, expected) in [
        ("1 . 5 enter", 1.5),
        ("4 2 enter", 42.0),
        (". 2 5 enter", 0.25),
        ("0 0 7 enter", 7.0),
        ("3 . 1 4 1 5 9 enter", 3.14159),
    ] {
        assert_eq!(run(keys).x(), expected, "{keys}");
    }
}

#[test]
fn addition_is_commutative() {
    assert_eq!(run("2 enter 3 +").x(), 5.0);
    assert_eq!(run("3 enter 2 +").x(), 5.0);
}

#[test]
fn subtraction_and_division_use_y_then_x() {
    assert_eq!(run("1 0 enter 4 -").x(), 6.0);
    assert_eq!(run("1 0 enter 4 /").x(), 2.5);
    assert_eq!(run("6 enter 7 *").x(), 42.0);
}

#[test]
fn power_raises_y_to_x() {
    assert_eq!(run("2 enter 1 0 wye-x").x(), 1024.0);
    assert_eq!(run("9 enter . 5 wye-x").x(), 3.0);
}

#[test]
fn chained_arithmetic_uses_the_stack() {
    // (3 + 4) * (5 + 6)
    let engine = run("3 enter 4 + 5 enter 6 + *");
    assert_eq!(engine.x(), 77.0);
}

#[test]
fn division_by_zero_is_recoverable() {
    let mut engine = run("5 enter 0 /");
    let display = engine.current_display();
    assert!(engine.x().is_nan());
    assert!(display.indicators.error);
    assert_eq!(display.text(), "Error     ");
    assert_eq!(engine.registers()[1], 5.0);

    // keep calculating without a reset
    engine.handle_buttons(parse_keys("2 enter 3 +").unwrap());
    assert!(!engine.current_display().indicators.error);
    assert_eq!(engine.x(), 5.0);
}

#[test]
fn domain_errors_light_the_indicator() {
    for keys in [
        "1 chs sqrt-x",
        "0 g exp-x",
        "0 g ten-x",
        "0 inverse-x",
        "3 chs f 0",
        "2 . 5 f 0",
        "2 g sin",
    ] {
        let engine = run(keys);
        assert!(engine.current_display().indicators.error, "{keys}");
        assert!(engine.x().is_nan(), "{keys}");
    }
}

#[test]
fn fix_digits_apply_to_every_later_render() {
    let mut engine = run("2 f 7");
    assert_eq!(engine.current_display().indicators.fix_digits, 2);

    engine.handle_buttons(parse_keys("1 enter 3 /").unwrap());
    assert_eq!(engine.current_display().text(), "0.33      ");
    engine.handle_buttons(parse_keys("1 0 0 0 *").unwrap());
    assert_eq!(engine.current_display().text(), "333.33    ");
    engine.handle_buttons(parse_keys("1 0 0 *").unwrap());
    assert_eq!(engine.current_display().text(), "33,333.33 ");
}

#[test]
fn fix_digits_clamp_negative_to_zero() {
    let engine = run("3 chs f 7");
    assert_eq!(engine.mode().fix_digits(), 0);
}

#[test]
fn angle_unit_round_trip() {
    let gradians = run("g 9 2 0 0 sin");
    assert_eq!(gradians.mode().angle_unit(), AngleUnit::Gradians);
    assert_eq!(gradians.current_display().indicators.angle_label, "GRAD");

    let degrees = run("g 9 g 7 1 8 0 sin");
    assert_eq!(degrees.mode().angle_unit(), AngleUnit::Degrees);

    let radians = run("g 8 g eex sin");
    let expected = std::f64::consts::PI.sin();
    assert!((gradians.x() - expected).abs() < EPS);
    assert!((degrees.x() - expected).abs() < EPS);
    assert!((radians.x() - expected).abs() < EPS);
}

#[test]
fn trig_in_degrees_by_default() {
    assert!((run("3 0 sin").x() - 0.5).abs() < EPS);
    assert!((run("6 0 cos").x() - 0.5).abs() < EPS);
    assert!((run("4 5 tan").x() - 1.0).abs() < EPS);
    assert!((run("1 g tan").x() - 45.0).abs() < EPS);
}

#[test]
fn reset_restores_power_on_state() {
    let mut engine = run("1 enter 2 enter 3 f 7 g 8 f 4 5 .");
    engine.reset();

    assert_eq!(engine.mode().fix_digits(), 4);
    assert_eq!(engine.mode().angle_unit(), AngleUnit::Degrees);
    assert!(engine.registers().iter().all(|v| v.is_nan()));
    assert_eq!(engine.entry(), "");
    assert!(!engine.modifiers().is_armed());
    assert_eq!(engine.current_display().text(), "0.0000    ");
}

#[test]
fn on_key_resets_like_reset() {
    let engine = run("9 enter 2 f 7 g 9 f on");
    assert_eq!(engine.mode().fix_digits(), 4);
    assert_eq!(engine.mode().angle_unit(), AngleUnit::Degrees);
    assert!(engine.x().is_nan());
    assert!(!engine.modifiers().is_armed());
}

#[test]
fn unary_functions_under_both_policies() {
    // X=16 over Y=7, Z=8
    let keys = "8 enter 7 enter 1 6 sqrt-x";

    let preserve = run(keys);
    let [x, y, z, _] = preserve.registers();
    assert_eq!((x, y, z), (4.0, 7.0, 8.0));

    let drain = run_with(
        EngineConfig {
            unary_policy: UnaryPolicy::Drain,
            ..Default::default()
        },
        keys,
    );
    let [x, y, _, _] = drain.registers();
    assert_eq!((x, y), (4.0, 8.0));
}

#[test]
fn stack_rearrangements() {
    let engine = run("1 enter 2 x-swap-y");
    assert_eq!(engine.registers()[..2], [1.0, 2.0]);

    let engine = run("4 enter 3 enter 2 enter 1 enter r-down");
    assert_eq!(engine.registers(), [2.0, 3.0, 4.0, 1.0]);

    let engine = run("4 enter 3 enter 2 enter 1 enter g r-down");
    assert_eq!(engine.registers(), [4.0, 1.0, 2.0, 3.0]);
}

#[test]
fn percentages_keep_y() {
    let engine = run("2 0 0 enter 1 5 g wye-x");
    assert_eq!(engine.registers()[..2], [30.0, 200.0]);

    let engine = run("5 0 enter 7 5 g inverse-x");
    assert_eq!(engine.registers()[..2], [50.0, 50.0]);
}

#[test]
fn parts_rounding_and_pi() {
    assert_eq!(run("3 . 7 5 g sto").x(), 3.0);
    assert_eq!(run("3 . 7 5 f sto").x(), 0.75);
    assert_eq!(run("2 f 7 2 . 3 4 5 6 g x-swap-y").x(), 2.35);
    assert!((run("g eex").x() - std::f64::consts::PI).abs() < EPS);
    assert_eq!(run("5 f 0").x(), 120.0);
}

#[test]
fn entry_is_shown_verbatim() {
    let engine = run("1 2 3 4 . 5 chs");
    let display = engine.current_display();
    assert_eq!(display.text(), "-1234.5   ");
    assert_eq!(display.cells[0], Cell::Sign);
    assert_eq!(display.cells[5], Cell::Point);
}

#[test]
fn reserved_keys_do_nothing_but_consume_shift() {
    let mut engine = run("4 enter 3 enter 2 enter 1 enter");
    let before = engine.registers();

    for keys in ["sst", "gto", "gsb", "rtos", "rcl", "sum", "g rcl", "f 8", "g 1", "f enter"] {
        engine.handle_buttons(parse_keys(keys).unwrap());
        assert_eq!(engine.registers(), before, "{keys}");
        assert!(!engine.modifiers().is_armed(), "{keys}");
    }
}

#[test]
fn shift_keys_toggle_independently() {
    let engine = run("f f");
    assert!(!engine.current_display().indicators.f);

    // g is consumed by 7 (DEG); f stays armed for the next 7 (FIX)
    let mut engine = run("3 enter g 9 f g 7");
    assert_eq!(engine.mode().angle_unit(), AngleUnit::Degrees);
    assert!(engine.current_display().indicators.f);

    engine.handle_buttons(parse_keys("7").unwrap());
    assert_eq!(engine.mode().fix_digits(), 3);
    assert!(!engine.current_display().indicators.f);
}

#[test]
fn inert_indicators_stay_off() {
    let engine = run("f g 1 2 3 enter");
    let indicators = engine.current_display().indicators;
    assert!(!indicators.user);
    assert!(!indicators.begin);
    assert!(!indicators.dmy);
    assert!(!indicators.complex);
    assert!(!indicators.prgm);
}

#[test]
fn display_snapshot_serializes() {
    let engine = run("1 enter");
    let json = serde_json::to_value(engine.current_display()).unwrap();
    assert_eq!(json["cells"].as_array().unwrap().len(), 10);
    assert_eq!(json["cells"][0]["kind"], "digit");
    assert_eq!(json["cells"][0]["value"], 1);
    assert_eq!(json["indicators"]["angle_unit"], "degrees");
    assert_eq!(json["indicators"]["fix_digits"], 4);
}
