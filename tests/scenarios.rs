//! End-to-end scenarios from `SPEC_FULL.md` §8.

use ltlfp::{Action, Alphabet, Atom, Domain, Effect, Formula, Predicate, Problem, Solver, State, Sym, Term, Verdict};

struct Rooms {
    alphabet: Alphabet,
    domain: Domain,
    position: Predicate,
    kitchen: ltlfp::ObjId,
    coridor: ltlfp::ObjId,
}

/// Builds the "home rooms" domain of §8's end-to-end scenarios: a `room` sort
/// with five objects, `position(r)`/`connected(a,b)` predicates and a single
/// `go(from, to)` action. `connected_facts` lets callers drop connectivity to
/// build the unreachable variant.
fn rooms(connected_facts: &[(&str, &str)]) -> (Rooms, State) {
    let mut alphabet = Alphabet::new();
    let names = ["kitchen", "toilet", "bedroom", "coridor", "balcony"];
    let room = alphabet.declare_sort(Sym::from("room"), names.iter().map(|&n| Sym::from(n)).collect());

    let obj = |alphabet: &Alphabet, name: &str| {
        let sort = alphabet.sort(room);
        sort.objects[names.iter().position(|&n| n == name).unwrap()]
    };

    let position = Predicate::new(alphabet.declare_rel(Sym::from("position"), vec![room]), 1);
    let connected = Predicate::new(alphabet.declare_rel(Sym::from("connected"), vec![room, room]), 2);

    let from = alphabet.fresh_var(Sym::from("from"), room);
    let to = alphabet.fresh_var(Sym::from("to"), room);

    let precondition = Formula::and([
        Formula::atom(position.call([Term::Var(from)])),
        Formula::or([
            Formula::atom(connected.call([Term::Var(from), Term::Var(to)])),
            Formula::atom(connected.call([Term::Var(to), Term::Var(from)])),
        ]),
    ]);
    let go = Action::new(
        "go",
        vec![from, to],
        precondition,
        vec![
            Effect::unconditional(vec![], vec![position.call([Term::Var(from)])], false),
            Effect::unconditional(vec![], vec![position.call([Term::Var(to)])], true),
        ],
    );

    let domain = Domain::new(vec![], vec![position.rel, connected.rel], vec![go]);

    let connected_atoms: Vec<_> = connected_facts
        .iter()
        .map(|&(a, b)| connected.call([Term::Obj(obj(&alphabet, a)), Term::Obj(obj(&alphabet, b))]))
        .collect();

    let kitchen = obj(&alphabet, "kitchen");
    let balcony = obj(&alphabet, "balcony");
    let coridor = obj(&alphabet, "coridor");

    let init = State::new(vec![], {
        let mut preds = connected_atoms;
        preds.push(position.call([Term::Obj(balcony)]));
        preds
    });

    (
        Rooms {
            alphabet,
            domain,
            position,
            kitchen,
            coridor,
        },
        init,
    )
}

const ALL_CONNECTIONS: &[(&str, &str)] = &[
    ("kitchen", "coridor"),
    ("toilet", "coridor"),
    ("bedroom", "coridor"),
    ("bedroom", "balcony"),
];

#[test]
fn reachable_home_rooms() {
    let (mut rooms, init) = rooms(ALL_CONNECTIONS);
    let goal = Formula::atom(rooms.position.call([Term::Obj(rooms.kitchen)]));
    let problem = Problem::new(vec![rooms.alphabet.sort_by_name(&Sym::from("room")).unwrap()], init, goal, Formula::True);

    let mut solver = Solver::new();
    let verdict = solver.solve(&mut rooms.alphabet, &rooms.domain, &problem);
    assert_eq!(verdict, Verdict::True);
    assert_eq!(solver.solution().unwrap().len(), 3);
}

#[test]
fn unreachable_without_connections() {
    let (mut rooms, init) = rooms(&[]);
    let goal = Formula::atom(rooms.position.call([Term::Obj(rooms.kitchen)]));
    let problem = Problem::new(vec![rooms.alphabet.sort_by_name(&Sym::from("room")).unwrap()], init, goal, Formula::True);

    let mut solver = Solver::new();
    let verdict = solver.solve(&mut rooms.alphabet, &rooms.domain, &problem);
    assert_eq!(verdict, Verdict::False);
    assert_eq!(solver.solution(), None);
}

#[test]
fn already_satisfied_goal_yields_empty_plan() {
    let (mut rooms, mut init) = rooms(ALL_CONNECTIONS);
    init.predicates.push(rooms.position.call([Term::Obj(rooms.kitchen)]));
    let goal = Formula::atom(rooms.position.call([Term::Obj(rooms.kitchen)]));
    let problem = Problem::new(vec![rooms.alphabet.sort_by_name(&Sym::from("room")).unwrap()], init, goal, Formula::True);

    let mut solver = Solver::new();
    let verdict = solver.solve(&mut rooms.alphabet, &rooms.domain, &problem);
    assert_eq!(verdict, Verdict::True);
    assert_eq!(solver.solution().unwrap().len(), 0);
}

#[test]
fn trivially_true_goal_yields_empty_plan() {
    let (mut rooms, init) = rooms(ALL_CONNECTIONS);
    let problem = Problem::new(
        vec![rooms.alphabet.sort_by_name(&Sym::from("room")).unwrap()],
        init,
        Formula::True,
        Formula::True,
    );

    let mut solver = Solver::new();
    let verdict = solver.solve(&mut rooms.alphabet, &rooms.domain, &problem);
    assert_eq!(verdict, Verdict::True);
    assert_eq!(solver.solution().unwrap().len(), 0);
}

#[test]
fn trajectory_forbidding_coridor_prunes_the_only_path() {
    let (mut rooms, init) = rooms(ALL_CONNECTIONS);
    let goal = Formula::atom(rooms.position.call([Term::Obj(rooms.kitchen)]));
    let trajectory = Formula::atom(rooms.position.call([Term::Obj(rooms.coridor)]))
        .not()
        .globally();
    let problem = Problem::new(vec![rooms.alphabet.sort_by_name(&Sym::from("room")).unwrap()], init, goal, trajectory);

    let mut solver = Solver::new();
    let verdict = solver.solve(&mut rooms.alphabet, &rooms.domain, &problem);
    assert_eq!(verdict, Verdict::False);
}

#[test]
fn propositional_light_switch_domain() {
    let mut alphabet = Alphabet::new();
    let light = alphabet.declare_rel(Sym::from("light_on"), vec![]);
    let switch_on = Action::new(
        "switch_on",
        vec![],
        Formula::True,
        vec![Effect::unconditional(vec![light], vec![], true)],
    );
    let switch_off = Action::new(
        "switch_off",
        vec![],
        Formula::True,
        vec![Effect::unconditional(vec![light], vec![], false)],
    );
    let domain = Domain::new(vec![light], vec![], vec![switch_on, switch_off]);
    let problem = Problem::new(
        vec![],
        State::new(vec![], vec![]),
        Formula::atom(Atom::new(light, [])),
        Formula::True,
    );

    let mut solver = Solver::new();
    let verdict = solver.solve(&mut alphabet, &domain, &problem);
    assert_eq!(verdict, Verdict::True);
    let plan = solver.solution().unwrap();
    assert_eq!(plan.len(), 1);
    assert_eq!(plan.steps[0].action.as_str(), "switch_on");
}
