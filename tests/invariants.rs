//! A few of the invariants from `SPEC_FULL.md` §8, exercised end-to-end
//! through the reference `BoundedEngine` rather than re-implemented from
//! scratch (the interesting claim is that the *compiled formula*, not a
//! hand-rolled checker, enforces them).

use ltlfp::{Action, Alphabet, Atom, Domain, Effect, Formula, Problem, Solver, State, Sym, Term, Verdict};

#[test]
fn empty_domain_verdict_matches_init_entails_goal() {
    let mut alphabet = Alphabet::new();
    let light = alphabet.declare_rel(Sym::from("light_on"), vec![]);
    let domain = Domain::new(vec![light], vec![], vec![]);

    // init |= goal: true.
    let problem_true = Problem::new(
        vec![],
        State::new(vec![light], vec![]),
        Formula::atom(Atom::new(light, [])),
        Formula::True,
    );
    let mut solver = Solver::new();
    assert_eq!(solver.solve(&mut alphabet, &domain, &problem_true), Verdict::True);
    assert_eq!(solver.solution().unwrap().len(), 0);

    // init |= goal: false, and there are no actions to change that.
    let problem_false = Problem::new(
        vec![],
        State::new(vec![], vec![]),
        Formula::atom(Atom::new(light, [])),
        Formula::True,
    );
    let mut solver2 = Solver::new();
    assert_eq!(solver2.solve(&mut alphabet, &domain, &problem_false), Verdict::False);
}

#[test]
fn determinism_same_inputs_same_verdict_and_plan() {
    let mut alphabet = Alphabet::new();
    let light = alphabet.declare_rel(Sym::from("light_on"), vec![]);
    let switch_on = Action::new(
        "switch_on",
        vec![],
        Formula::True,
        vec![Effect::unconditional(vec![light], vec![], true)],
    );
    let domain = Domain::new(vec![light], vec![], vec![switch_on]);
    let problem = Problem::new(
        vec![],
        State::new(vec![], vec![]),
        Formula::atom(Atom::new(light, [])),
        Formula::True,
    );

    let mut first = Solver::new();
    let v1 = first.solve(&mut alphabet, &domain, &problem);
    let mut second = Solver::new();
    let v2 = second.solve(&mut alphabet, &domain, &problem);

    assert_eq!(v1, v2);
    assert_eq!(first.solution(), second.solution());
}

#[test]
fn solving_twice_replaces_the_stored_solution() {
    let mut alphabet = Alphabet::new();
    let light = alphabet.declare_rel(Sym::from("light_on"), vec![]);
    let domain = Domain::new(vec![light], vec![], vec![]);

    let unsat = Problem::new(
        vec![],
        State::new(vec![], vec![]),
        Formula::atom(Atom::new(light, [])),
        Formula::True,
    );
    let sat = Problem::new(
        vec![],
        State::new(vec![light], vec![]),
        Formula::atom(Atom::new(light, [])),
        Formula::True,
    );

    let mut solver = Solver::new();
    assert_eq!(solver.solve(&mut alphabet, &domain, &unsat), Verdict::False);
    assert_eq!(solver.solution(), None);

    assert_eq!(solver.solve(&mut alphabet, &domain, &sat), Verdict::True);
    assert_eq!(solver.solution().unwrap().len(), 0);
}
