#[cfg(test)]
mod tests {
    use std::path::Path;
    use std::time::Duration;

    use float_cmp::approx_eq;
    use itertools::Itertools;
    use rand::prelude::SmallRng;
    use rand::{Rng, SeedableRng};
    use test_case::test_case;

    use wave_opt::config::{StrategyChoice, WaveConfig};
    use wave_opt::io::output::{OutputStatus, WaveOutput};
    use wave_opt::io::read_instance;
    use wave_opt::opt::{Strategy, WaveOptimizer, WaveOutcome};
    use wave_opt::time::{TimeBudget, TimeStamp};
    use wave_rs::entities::{
        Aisle, Instance, ItemQtys, Order, Ratio, WaveSolution, candidate_ratios,
    };
    use wave_rs::io::{export, import};
    use wave_rs::io::parser::parse_instance;
    use wave_rs::util::assertions;

    const STRATEGIES: [Strategy; 2] = [Strategy::FixedAisles, Strategy::RatioSearch];

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn budget() -> TimeBudget {
        TimeBudget::new(TimeStamp::now(), Duration::from_secs(120), Duration::from_secs(1))
    }

    fn load(path: &str) -> Instance {
        import(&read_instance(Path::new(path)).unwrap()).unwrap()
    }

    /// Best ratio found by `strategy`, `None` if it found no wave. Panics on a cut-off search.
    fn best_ratio(instance: &Instance, strategy: Strategy) -> Option<Ratio> {
        let result = strategy
            .search(instance, &WaveConfig::default(), &budget())
            .unwrap();
        assert!(!result.cut_off, "{strategy:?} was cut off");
        result.best.map(|assignment| {
            let solution = WaveSolution::from_assignment(&assignment);
            assert!(assertions::solution_is_feasible(instance, &solution));
            assignment.ratio(instance).unwrap()
        })
    }

    /// Enumerates every pair of non-empty order and aisle subsets.
    fn brute_force(instance: &Instance) -> Option<Ratio> {
        let orders = (0..instance.n_orders()).powerset().filter(|s| !s.is_empty());
        let aisles = (0..instance.n_aisles())
            .powerset()
            .filter(|s| !s.is_empty())
            .collect_vec();
        orders
            .cartesian_product(aisles.iter())
            .map(|(orders, aisles)| WaveSolution {
                orders: orders.into_iter().collect(),
                aisles: aisles.iter().copied().collect(),
            })
            .filter(|solution| assertions::first_violation(instance, solution).is_none())
            .filter_map(|solution| solution.ratio(instance))
            .max()
    }

    fn random_instance(rng: &mut SmallRng) -> Instance {
        let n_orders = rng.random_range(1..=6);
        let n_aisles = rng.random_range(1..=4);
        let n_items = rng.random_range(1..=3);
        let orders = (0..n_orders)
            .map(|o| {
                let demand = (0..rng.random_range(1..=n_items))
                    .map(|_| (rng.random_range(0..n_items), rng.random_range(1..=4)))
                    .collect_vec();
                Order::new(o, ItemQtys::new(demand).unwrap())
            })
            .collect_vec();
        let aisles = (0..n_aisles)
            .map(|a| {
                let stock = (0..n_items)
                    .map(|i| (i, rng.random_range(0..=5)))
                    .collect_vec();
                Aisle::new(a, ItemQtys::new(stock).unwrap())
            })
            .collect_vec();
        let total = orders.iter().map(|o| o.units()).sum::<u64>() as u32;
        let lb = rng.random_range(0..=total / 2);
        let ub = rng.random_range(lb..=total);
        Instance::new(orders, aisles, n_items, lb, ub).unwrap()
    }

    #[test_case("../assets/two_orders.txt", Some(Ratio::new(3, 1)); "two_orders")]
    #[test_case("../assets/single_aisle.txt", Some(Ratio::new(3, 1)); "single_aisle")]
    #[test_case("../assets/exact_size.txt", Some(Ratio::new(3, 1)); "exact_size")]
    #[test_case("../assets/no_wave.txt", None; "no_wave")]
    fn test_instance(instance_path: &str, expected: Option<Ratio>) {
        init_logger();
        let instance = load(instance_path);
        for strategy in STRATEGIES {
            assert_eq!(best_ratio(&instance, strategy), expected, "{strategy:?}");
        }
        assert_eq!(brute_force(&instance), expected);
    }

    #[test]
    fn strategies_agree_on_warehouse() {
        init_logger();
        let instance = load("../assets/warehouse.txt");
        let optimum = brute_force(&instance);
        assert!(optimum.is_some());
        for strategy in STRATEGIES {
            assert_eq!(best_ratio(&instance, strategy), optimum, "{strategy:?}");
        }
    }

    #[test_case(0; "seed 0")]
    #[test_case(1; "seed 1")]
    #[test_case(2; "seed 2")]
    #[test_case(3; "seed 3")]
    fn random_instances_match_brute_force(seed: u64) {
        init_logger();
        let mut rng = SmallRng::seed_from_u64(seed);
        for _ in 0..10 {
            let instance = random_instance(&mut rng);
            let optimum = brute_force(&instance);
            if let Some(optimum) = optimum {
                let candidates = candidate_ratios(
                    instance.wave_size_lb,
                    instance.effective_wave_size_ub(),
                    instance.n_aisles() as u32,
                );
                assert!(candidates.contains(&optimum), "{optimum} not a candidate");
            }
            for strategy in STRATEGIES {
                assert_eq!(
                    best_ratio(&instance, strategy),
                    optimum,
                    "{strategy:?} on {instance:?}"
                );
            }
        }
    }

    #[test]
    fn reruns_yield_same_ratio() {
        init_logger();
        let instance = load("../assets/warehouse.txt");
        for strategy in STRATEGIES {
            let first = best_ratio(&instance, strategy);
            let second = best_ratio(&instance, strategy);
            assert_eq!(first, second, "{strategy:?}");
        }
    }

    #[test]
    fn equal_bounds_force_exact_sum() {
        init_logger();
        let instance = load("../assets/exact_size.txt");
        let config = WaveConfig {
            strategy: StrategyChoice::RatioSearch,
            ..WaveConfig::default()
        };
        let report = WaveOptimizer::new(instance.clone(), config)
            .solve(&budget())
            .unwrap();
        match report.outcome {
            WaveOutcome::Wave(solution) => assert_eq!(solution.picked_units(&instance), 6),
            other => panic!("expected a wave, got {other:?}"),
        }
    }

    #[test]
    fn single_aisle_is_selected() {
        init_logger();
        let instance = load("../assets/single_aisle.txt");
        let config = WaveConfig {
            strategy: StrategyChoice::FixedAisles,
            ..WaveConfig::default()
        };
        let report = WaveOptimizer::new(instance.clone(), config)
            .solve(&budget())
            .unwrap();
        match report.outcome {
            WaveOutcome::Wave(solution) => {
                assert_eq!(solution.aisles.iter().copied().collect_vec(), vec![0]);
                assert!(approx_eq!(f64, solution.objective(&instance), 3.0));
            }
            other => panic!("expected a wave, got {other:?}"),
        }
    }

    #[test]
    fn two_order_example() {
        init_logger();
        // aisle 0 alone covers the whole demand of 5 units
        let text = "2 1 2\n1 0 3\n1 0 2\n1 0 5\n1 0 1\n2 5\n";
        let instance = import(&parse_instance(text).unwrap()).unwrap();
        for strategy in STRATEGIES {
            let config = WaveConfig {
                strategy: match strategy {
                    Strategy::FixedAisles => StrategyChoice::FixedAisles,
                    Strategy::RatioSearch => StrategyChoice::RatioSearch,
                },
                ..WaveConfig::default()
            };
            let report = WaveOptimizer::new(instance.clone(), config)
                .solve(&budget())
                .unwrap();
            assert_eq!(report.strategy, strategy);
            match report.outcome {
                WaveOutcome::Wave(solution) => {
                    assert_eq!(solution.orders.iter().copied().collect_vec(), vec![0, 1]);
                    assert_eq!(solution.aisles.iter().copied().collect_vec(), vec![0]);
                    assert!(approx_eq!(f64, solution.objective(&instance), 5.0));
                }
                other => panic!("expected a wave, got {other:?}"),
            }
        }
    }

    #[test]
    fn no_wave_is_a_distinguished_outcome() {
        init_logger();
        let instance = load("../assets/no_wave.txt");
        let report = WaveOptimizer::new(instance, WaveConfig::default())
            .solve(&budget())
            .unwrap();
        assert_eq!(report.outcome, WaveOutcome::NoFeasibleWave);
        assert!(!report.cut_off);
    }

    #[test]
    fn unreachable_lower_bound_skips_engine() {
        init_logger();
        // 5 units of demand, but a wave of at least 6 is required
        let text = "2 1 2\n1 0 3\n1 0 2\n1 0 5\n1 0 1\n6 9\n";
        let instance = import(&parse_instance(text).unwrap()).unwrap();
        for strategy in STRATEGIES {
            let result = strategy
                .search(&instance, &WaveConfig::default(), &budget())
                .unwrap();
            assert!(result.best.is_none());
            assert_eq!(result.n_probes, 0);
        }
    }

    #[test]
    fn exhausted_budget_is_reported() {
        init_logger();
        let instance = load("../assets/warehouse.txt");
        let exhausted =
            TimeBudget::new(TimeStamp::now(), Duration::from_secs(2), Duration::from_secs(2));
        let report = WaveOptimizer::new(instance, WaveConfig::default())
            .solve(&exhausted)
            .unwrap();
        assert_eq!(report.outcome, WaveOutcome::BudgetExhausted);
        assert!(report.cut_off);
        assert_eq!(report.n_probes, 0);
    }

    #[test]
    #[cfg(not(feature = "highs"))]
    fn interrupted_search_returns_best_wave() {
        init_logger();
        let instance = load("../assets/warehouse.txt");
        for strategy in [StrategyChoice::FixedAisles, StrategyChoice::RatioSearch] {
            let config = WaveConfig {
                strategy,
                ..WaveConfig::default()
            };
            // every engine call overruns a zero cap
            let capped = budget().with_probe_cap(Duration::ZERO);
            let report = WaveOptimizer::new(instance.clone(), config)
                .solve(&capped)
                .unwrap();
            assert!(report.cut_off, "{strategy:?}");
            let WaveOutcome::Wave(solution) = &report.outcome else {
                panic!("{strategy:?}: expected a wave, got {:?}", report.outcome);
            };
            assert_eq!(assertions::first_violation(&instance, solution), None);

            let ext_solution = export(&instance, solution);
            let output = WaveOutput::new(&report, Some(ext_solution), config);
            assert_eq!(output.status, OutputStatus::Wave);
        }
    }

    #[test]
    fn zero_orders_are_rejected() {
        init_logger();
        let ext_instance = parse_instance("0 1 1\n1 0 5\n1 1\n").unwrap();
        assert!(import(&ext_instance).is_err());
    }
}
