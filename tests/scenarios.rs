use trading_post::solvers::all_solvers;
use trading_post::{
    CostMatrix, DynamicProgramming, Hop, HopConvention, RouteSolver, SolveError,
};

#[test]
fn two_ports_single_move() {
    let m = CostMatrix::unreachable(2).with_cost(0, 1, 5);
    let s = DynamicProgramming.solve(&m).unwrap();
    assert_eq!(s.cost, 5);
    assert_eq!(s.route.hops, vec![Hop::start(), Hop::new(0, 1, 5)]);
    for solver in all_solvers() {
        let s = solver.solve(&m).unwrap();
        assert_eq!(s.cost, 5, "{}", solver.name());
        assert_eq!(s.route.ports(), vec![0, 1]);
    }
}

#[test]
fn stopping_beats_direct_move() {
    let m = CostMatrix::unreachable(3)
        .with_cost(0, 1, 3)
        .with_cost(0, 2, 10)
        .with_cost(1, 2, 4);
    let dp = DynamicProgramming.solve(&m).unwrap();
    assert_eq!(dp.cost, 7);
    assert_eq!(dp.route.hops.last(), Some(&Hop::new(1, 2, 7)));
    for solver in all_solvers() {
        let s = solver.solve(&m).unwrap();
        assert_eq!(s.cost, 7, "{}", solver.name());
        assert_eq!(s.route.ports(), vec![0, 1, 2], "{}", solver.name());
    }
}

#[test]
fn unreachable_port_is_not_a_stop() {
    let m = CostMatrix::unreachable(3)
        .with_cost(0, 2, 8)
        .with_cost(1, 2, 1);
    for solver in all_solvers() {
        let s = solver.solve(&m).unwrap();
        assert_eq!(s.cost, 8, "{}", solver.name());
        assert_eq!(s.route.ports(), vec![0, 2], "{}", solver.name());
    }
}

#[test]
fn single_port_is_trivial() {
    let m = CostMatrix::unreachable(1);
    for solver in all_solvers() {
        let s = solver.solve(&m).unwrap();
        assert_eq!(s.cost, 0);
        assert_eq!(s.route.hops, vec![Hop::start()]);
    }
}

#[test]
fn no_ports_is_trivial() {
    let m = CostMatrix::unreachable(0);
    for solver in all_solvers() {
        let s = solver.solve(&m).unwrap();
        assert_eq!(s.cost, 0);
        assert!(s.route.is_empty());
    }
}

#[test]
fn destination_without_predecessor_is_infeasible() {
    let m = CostMatrix::unreachable(4)
        .with_cost(0, 1, 1)
        .with_cost(1, 2, 1)
        .with_cost(0, 2, 1);
    for solver in all_solvers() {
        assert_eq!(
            solver.solve(&m),
            Err(SolveError::Infeasible { destination: 3 }),
            "{}",
            solver.name()
        );
    }
}

#[test]
fn destination_reachable_only_from_stranded_port_is_infeasible() {
    // Port 2 has an edge to 3, but nothing reaches port 2.
    let m = CostMatrix::unreachable(4)
        .with_cost(0, 1, 1)
        .with_cost(2, 3, 1);
    for solver in all_solvers() {
        assert!(
            matches!(solver.solve(&m), Err(SolveError::Infeasible { .. })),
            "{}",
            solver.name()
        );
    }
}

#[test]
fn huge_costs_overflow_instead_of_wrapping() {
    let m = CostMatrix::unreachable(3)
        .with_cost(0, 1, u64::MAX)
        .with_cost(1, 2, 1);
    for solver in all_solvers() {
        assert_eq!(
            solver.solve(&m),
            Err(SolveError::CostOverflow {
                origin: 1,
                destination: 2
            }),
            "{}",
            solver.name()
        );
    }
}

#[test]
fn overflowing_route_loses_to_a_cheap_direct_move() {
    let m = CostMatrix::unreachable(3)
        .with_cost(0, 1, u64::MAX - 1)
        .with_cost(1, 2, 5)
        .with_cost(0, 2, 3);
    for solver in all_solvers() {
        let s = solver.solve(&m).unwrap();
        assert_eq!(s.cost, 3, "{}", solver.name());
        assert_eq!(s.route.ports(), vec![0, 2], "{}", solver.name());
    }
}

#[test]
fn overflow_on_a_dead_end_is_still_infeasible() {
    let m = CostMatrix::unreachable(4)
        .with_cost(0, 1, u64::MAX)
        .with_cost(1, 2, 5);
    for solver in all_solvers() {
        assert_eq!(
            solver.solve(&m),
            Err(SolveError::Infeasible { destination: 3 }),
            "{}",
            solver.name()
        );
    }
}

#[test]
fn huge_stop_offset_does_not_change_the_answer() {
    let m = CostMatrix::new(vec![
        vec![Some(0), Some(10), Some(100)],
        vec![None, Some(u64::MAX - 5), Some(1)],
        vec![None, None, Some(0)],
    ])
    .unwrap();
    for solver in all_solvers() {
        let s = solver.solve(&m).unwrap();
        assert_eq!(s.cost, 11, "{}", solver.name());
        assert_eq!(s.route.ports(), vec![0, 1, 2], "{}", solver.name());
    }
}

#[test]
fn conventions_are_declared() {
    let m = CostMatrix::unreachable(2).with_cost(0, 1, 1);
    for solver in all_solvers() {
        assert_eq!(solver.solve(&m).unwrap().route.convention, solver.convention());
    }
    assert_eq!(DynamicProgramming.convention(), HopConvention::Cumulative);
}
