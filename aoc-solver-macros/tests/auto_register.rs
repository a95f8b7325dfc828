use aoc_solver::{
    AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError,
    SolverRegistryBuilder,
};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2016, day = 3, tags = ["macro-test", "numbers"])]
struct Triangles;

impl AocParser for Triangles {
    type SharedData<'a> = Vec<[u32; 3]>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .lines()
            .map(|line| {
                let sides: Vec<u32> = line
                    .split_whitespace()
                    .map(|s| s.parse().map_err(|_| ParseError::InvalidFormat(line.to_string())))
                    .collect::<Result<_, _>>()?;
                <[u32; 3]>::try_from(sides).map_err(|_| ParseError::InvalidFormat(line.to_string()))
            })
            .collect()
    }
}

impl PartSolver<1> for Triangles {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let valid = shared
            .iter()
            .filter(|[a, b, c]| a + b > *c && a + c > *b && b + c > *a)
            .count();
        Ok(valid.to_string())
    }
}

impl PartSolver<2> for Triangles {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.len().to_string())
    }
}

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(year = 2016, day = 4)]
struct Untagged;

impl AocParser for Untagged {
    type SharedData<'a> = &'a str;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(input)
    }
}

impl PartSolver<1> for Untagged {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.len().to_string())
    }
}

#[test]
fn test_plugins_are_collected() {
    let registry = SolverRegistryBuilder::new()
        .register_all_plugins()
        .unwrap()
        .build();

    let info = registry.storage().get_info(2016, 3).unwrap();
    assert_eq!(info.parts, 2);
    assert!(registry.storage().contains(2016, 4));

    let mut solver = registry.create_solver(2016, 3, "5 10 25\n3 4 5").unwrap();
    assert_eq!(solver.solve(1).unwrap().answer, "1");
    assert_eq!(solver.solve(2).unwrap().answer, "2");
}

#[test]
fn test_tag_filter_selects_plugins() {
    let registry = SolverRegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&"macro-test"))
        .unwrap()
        .build();

    assert_eq!(registry.storage().len(), 1);
    assert!(registry.storage().contains(2016, 3));
    assert!(!registry.storage().contains(2016, 4));
}

#[test]
fn test_registering_plugins_twice_is_duplicate() {
    let builder = SolverRegistryBuilder::new().register_all_plugins().unwrap();
    assert!(builder.register_all_plugins().is_err());
}
