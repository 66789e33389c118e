use approx::assert_abs_diff_eq;

use rocket_ascent::io::{ConsoleSink, CsvSink, RecordSink, Tee};
use rocket_ascent::sim::{simulate, simulate_with};
use rocket_ascent::types::{presets, Rocket, SimConfig};
use rocket_ascent::{RunConfig, SimError};

fn run_to_strings(rocket: &Rocket, config: &SimConfig) -> (String, String) {
    let mut csv = CsvSink::new(Vec::new()).unwrap();
    let mut console = ConsoleSink::new(Vec::new());
    simulate_with(rocket, config, &mut Tee(&mut csv, &mut console)).unwrap();
    (
        String::from_utf8(csv.into_inner()).unwrap(),
        String::from_utf8(console.into_inner()).unwrap(),
    )
}

#[test]
fn reference_scenario_end_to_end() {
    let (csv, console) = run_to_strings(&presets::reference_rocket(), &SimConfig::default());

    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "time, mass, altitude, velocity, Mach");
    assert_eq!(lines.len(), 1 + 1001);
    assert_eq!(lines[1], "0.00, 50.00, 0.00, 0.00, 0.00");
    assert!(lines[1001].starts_with("10.00, 45.00, "));

    let console_lines: Vec<&str> = console.lines().collect();
    assert_eq!(console_lines.len(), 1001);
    assert_eq!(
        console_lines[0],
        "time = 0.00 s, mass = 50.00 kg, altitude = 0.00 m, velocity = 0.00 m/s, Mach = 0.00"
    );
    assert!(console_lines[1000].starts_with("time = 10.00 s, mass = 45.00 kg, "));
}

#[test]
fn every_row_has_two_decimals() {
    let (csv, _) = run_to_strings(&presets::reference_rocket(), &SimConfig::default());
    for line in csv.lines().skip(1) {
        let fields: Vec<&str> = line.split(", ").collect();
        assert_eq!(fields.len(), 5, "bad row: {line}");
        for f in fields {
            let (_, decimals) = f.split_once('.').unwrap();
            assert_eq!(decimals.len(), 2, "bad field {f} in {line}");
        }
    }
}

#[test]
fn runs_are_deterministic() {
    let config = SimConfig::default();
    let a = run_to_strings(&presets::reference_rocket(), &config);
    let b = run_to_strings(&presets::reference_rocket(), &config);
    assert_eq!(a, b);

    let ra = simulate(&presets::reference_rocket(), &config).unwrap();
    let rb = simulate(&presets::reference_rocket(), &config).unwrap();
    assert_eq!(ra, rb);
}

#[test]
fn mass_follows_depletion_rule() {
    let rocket = presets::reference_rocket();
    let config = SimConfig::default();
    let records = simulate(&rocket, &config).unwrap();
    for pair in records.windows(2) {
        let expected = (pair[0].mass - rocket.burn_rate * config.dt).max(0.0);
        assert_eq!(pair[1].mass, expected);
    }
}

#[test]
fn drag_free_run_matches_closed_form() {
    // No drag and no burn: constant acceleration over the whole flight.
    let rocket = Rocket {
        cd: 0.0,
        burn_rate: 0.0,
        ..presets::reference_rocket()
    };
    let config = SimConfig::default();
    let a = (rocket.thrust - rocket.mass * config.gravity) / rocket.mass;

    let records = simulate(&rocket, &config).unwrap();
    for r in records.iter().step_by(100) {
        assert_abs_diff_eq!(r.velocity, a * r.time, epsilon = 1e-9);
        assert_abs_diff_eq!(r.altitude, 0.5 * a * r.time * r.time, epsilon = 1e-9);
    }
}

#[test]
fn velocity_and_altitude_are_advanced() {
    let records = simulate(&presets::reference_rocket(), &SimConfig::default()).unwrap();
    let last = records.last().unwrap();
    assert!(last.velocity > 5.0);
    assert!(last.altitude > 10.0);
    assert_abs_diff_eq!(last.mach, last.velocity / 340.29, epsilon = 1e-12);
}

#[test]
fn config_file_drives_simulation() {
    let config = RunConfig::from_toml(
        r#"
        [sim]
        dt = 0.1
        t_max = 2.0

        [rocket]
        mass = 10.0
        burn_rate = 1.0
        "#,
    )
    .unwrap();
    let records = simulate(&config.rocket, &config.sim).unwrap();
    assert_eq!(records.len(), 21);
    assert_abs_diff_eq!(records[20].mass, 8.0, epsilon = 1e-9);
}

#[test]
fn invalid_rocket_is_reported() {
    let rocket = Rocket {
        cd: -0.5,
        ..presets::reference_rocket()
    };
    let mut sink = Vec::new();
    match simulate_with(&rocket, &SimConfig::default(), &mut sink) {
        Err(SimError::InvalidParameter { name, .. }) => assert_eq!(name, "rocket.cd"),
        other => panic!("expected invalid cd, got {:?}", other),
    }
    assert!(sink.is_empty());
}

#[test]
fn sink_errors_propagate() {
    struct Broken;
    impl RecordSink for Broken {
        fn accept(&mut self, _: &rocket_ascent::types::StepRecord) -> rocket_ascent::Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed").into())
        }
    }
    let result = simulate_with(&presets::reference_rocket(), &SimConfig::default(), &mut Broken);
    assert!(matches!(result, Err(SimError::Io(_))));
}
