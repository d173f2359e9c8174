//! Accumulation property tests
//!
//! Tests that agent work accrues exactly as configured.

use production_sim::{ConstantVariate, Model, ModelParams, UnitVariate};

/// With no variate source, k steps accrue production * k per agent
#[test]
fn test_no_variate_accrues_raw_production() {
    let mut model = Model::new(ModelParams {
        num_agents: 3,
        default_production: 7.5,
        seed: 1,
        variate: None,
    });

    for _ in 0..4 {
        model.step();
    }

    for (_, work) in model.agent_work() {
        assert_eq!(work, 7.5 * 4.0);
    }
}

/// A constant variate of 2 doubles each step's accrual
#[test]
fn test_constant_variate_doubles_accrual() {
    let mut model = Model::new(ModelParams {
        num_agents: 2,
        default_production: 10.0,
        seed: 1,
        variate: Some(Box::new(ConstantVariate(2.0))),
    });

    for _ in 0..3 {
        model.step();
    }

    for (_, work) in model.agent_work() {
        assert_eq!(work, 10.0 * 2.0 * 3.0);
    }
}

/// Model total equals the sum of per-agent work
#[test]
fn test_total_matches_sum_of_agents() {
    let mut model = Model::new(ModelParams {
        num_agents: 5,
        default_production: 10.0,
        seed: 42,
        variate: Some(Box::new(ConstantVariate(1.5))),
    });

    for _ in 0..6 {
        model.step();
    }

    let per_agent: f64 = model.agent_work().iter().map(|(_, work)| work).sum();
    assert_eq!(model.total_production(), per_agent);
}

/// One agent, production 10, no variate, 3 steps -> total 30
#[test]
fn test_single_agent_three_steps() {
    let mut model = Model::new(ModelParams {
        num_agents: 1,
        default_production: 10.0,
        seed: 1,
        variate: None,
    });

    let mut last = None;
    for _ in 0..3 {
        last = Some(model.step());
    }

    let record = last.unwrap();
    assert_eq!(record.step, 3);
    assert_eq!(record.total_production, 30.0);
}

/// Two agents, production 10 each, unit variate, 5 steps -> total 100
#[test]
fn test_two_agents_unit_variate_five_steps() {
    let mut model = Model::new(ModelParams {
        num_agents: 2,
        default_production: 10.0,
        seed: 1,
        variate: Some(Box::new(UnitVariate)),
    });

    for _ in 0..5 {
        model.step();
    }

    assert_eq!(model.total_production(), 100.0);
}

/// Work to date never decreases across steps
#[test]
fn test_work_is_monotonically_non_decreasing() {
    let mut model = Model::new(ModelParams {
        num_agents: 4,
        default_production: 10.0,
        seed: 42,
        variate: Some(Box::new(ConstantVariate(0.5))),
    });

    let mut previous = model.total_production();
    for _ in 0..10 {
        let record = model.step();
        assert!(record.total_production >= previous);
        previous = record.total_production;
    }
}

/// Step records count up from 1 without gaps
#[test]
fn test_step_records_count_up() {
    let mut model = Model::new(ModelParams::default());
    for expected in 1..=5 {
        assert_eq!(model.step().step, expected);
    }
}
