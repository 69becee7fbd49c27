//////////////////////////////////////////////////////////////////////////////////////////////////
// TESTS
//////////////////////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use crate::Kinetics::arrhenius::ArrheniusCoeffs;
    use crate::Kinetics::plog_rate::ArrheniusPLOGRate;
    use crate::Kinetics::plog_table::{ArrheniusData, PLOGTable, parse_arrhenius_data};
    use crate::Kinetics::rate_config::RateContext;
    use crate::Kinetics::reaction_rate::{ReactionRate, ReactionRateEnum, create_rate_from_dict};
    use approx::assert_relative_eq;
    use nalgebra::DVector;
    use serde_json::json;

    fn breakpoints() -> Vec<ArrheniusData> {
        vec![
            ArrheniusData::new(0.1, 9.2e38, -8.65, 7000.0),
            ArrheniusData::new(1.0, 9.5e42, -9.43, 11200.0),
            ArrheniusData::new(10.0, 1.5e45, -9.69, 15100.0),
            ArrheniusData::new(100.0, 1.8e43, -8.78, 16800.0),
            ArrheniusData::new(1.0e5, 4.4e9, 1.45, 2400.0),
        ]
    }

    fn plog() -> ArrheniusPLOGRate {
        ArrheniusPLOGRate::with_table(9.2e38, -9.43, 7000.0, breakpoints()).unwrap()
    }

    fn central_difference(rate: &ArrheniusPLOGRate, p: f64, T: f64) -> f64 {
        let h = 1e-2;
        (rate.rate(p, T + h) - rate.rate(p, T - h)) / (2.0 * h)
    }

    #[test]
    fn test_rate_at_breakpoint_is_direct_arrhenius() {
        let expected = 9.5e42 * 1000.0_f64.powf(-9.43) * (-11200.0_f64 / 1000.0).exp();
        assert_eq!(plog().rate(1.0, 1000.0), expected);
    }

    #[test]
    fn test_rate_below_lowest_breakpoint() {
        let lowest = ArrheniusCoeffs::new(9.2e38, -8.65, 7000.0);
        assert_eq!(plog().rate(0.05, 1000.0), lowest.K_const(1000.0));
        assert_eq!(plog().ddT(0.05, 1000.0), lowest.dK_dT(1000.0));
    }

    #[test]
    fn test_rate_above_highest_breakpoint() {
        let highest = ArrheniusCoeffs::new(4.4e9, 1.45, 2400.0);
        assert_eq!(plog().rate(1.0e6, 1000.0), highest.K_const(1000.0));
        assert_eq!(plog().ddT(1.0e6, 1000.0), highest.dK_dT(1000.0));
    }

    #[test]
    fn test_rate_interior_log_log_interpolation() {
        let T = 1000.0_f64;
        let kl = ArrheniusCoeffs::new(9.5e42, -9.43, 11200.0).K_const(T);
        let kr = ArrheniusCoeffs::new(1.5e45, -9.69, 15100.0).K_const(T);
        let (p, pl, pr) = (5.0_f64, 1.0_f64, 10.0_f64);
        let logk = kl.log10()
            + (p.log10() - pl.log10()) * (kr.log10() - kl.log10()) / (pr.log10() - pl.log10());
        let k = plog().rate(p, T);
        assert_eq!(k, 10.0_f64.powf(logk));
        assert!(k > kl.min(kr) && k < kl.max(kr));
    }

    #[test]
    fn test_ddT_interior_closed_form() {
        let T = 1000.0_f64;
        let kl = ArrheniusCoeffs::new(9.5e42, -9.43, 11200.0).K_const(T);
        let kr = ArrheniusCoeffs::new(1.5e45, -9.69, 15100.0).K_const(T);
        let (p, pl, pr) = (5.0_f64, 1.0_f64, 10.0_f64);
        let a = (pr.log10() - p.log10()) / (pr.log10() - pl.log10());
        let b = (p.log10() - pl.log10()) / (pr.log10() - pl.log10());
        assert_relative_eq!(a + b, 1.0, max_relative = 1e-15);
        let k = plog().rate(p, T);
        assert_eq!(plog().ddT(p, T), k * (kl * b + kr * a) / (kr * kl));
    }

    #[test]
    fn test_ddT_at_inner_breakpoint_is_single_row() {
        let plog = plog();
        let T = 1000.0;
        for entry in &plog.table().entries()[1..4] {
            assert_eq!(plog.ddT(entry.p, T), entry.arrhenius.dK_dT(T));
        }
    }

    #[test]
    fn test_sort_invariant_under_permutations() {
        let reference = PLOGTable::build(breakpoints()).unwrap();
        let mut rows = breakpoints();
        for _ in 0..rows.len() {
            rows.rotate_left(1);
            assert_eq!(PLOGTable::build(rows.clone()).unwrap(), reference);
            let mut reversed = rows.clone();
            reversed.reverse();
            assert_eq!(PLOGTable::build(reversed).unwrap(), reference);
        }
        let bits = |t: &PLOGTable| -> Vec<[u64; 4]> {
            t.entries()
                .iter()
                .map(|e| e.to_row().map(f64::to_bits))
                .collect()
        };
        rows.swap(0, 3);
        assert_eq!(bits(&PLOGTable::build(rows).unwrap()), bits(&reference));
    }

    #[test]
    fn test_boundary_continuity() {
        let plog = plog();
        for T in [500.0, 1000.0, 1500.0, 2500.0] {
            for entry in plog.table().entries() {
                let direct = entry.arrhenius.K_const(T);
                assert_eq!(plog.rate(entry.p, T), direct);
                // the interpolated rate tends to the breakpoint rate from both sides
                let below = plog.rate(entry.p * (1.0 - 1e-12), T);
                let above = plog.rate(entry.p * (1.0 + 1e-12), T);
                assert_relative_eq!(below, direct, max_relative = 1e-9);
                assert_relative_eq!(above, direct, max_relative = 1e-9);
            }
        }
    }

    #[test]
    fn test_fallback_equivalence() {
        let fallback = ArrheniusPLOGRate::new(9.2e38, -9.43, 7000.0);
        let coeffs = ArrheniusCoeffs::new(9.2e38, -9.43, 7000.0);
        for p in [1e-3, 0.1, 1.0, 1e3, 1e8] {
            for T in [300.0, 1000.0, 2000.0] {
                let direct = 9.2e38 * f64::powf(T, -9.43) * (-7000.0 / T).exp();
                assert_eq!(fallback.rate(p, T), direct);
                assert_eq!(fallback.rate(p, T), coeffs.K_const(T));
            }
        }
    }

    #[test]
    fn test_derivative_consistency_fallback_and_boundaries() {
        let fallback = ArrheniusPLOGRate::new(9.2e38, -9.43, 7000.0);
        let plog = plog();
        for T in [600.0, 1000.0, 1800.0] {
            assert_relative_eq!(
                fallback.ddT(1.0, T),
                central_difference(&fallback, 1.0, T),
                max_relative = 1e-6
            );
            // below, at every breakpoint, above
            for p in [0.01, 0.1, 1.0, 10.0, 100.0, 1.0e5, 1.0e7] {
                assert_relative_eq!(
                    plog.ddT(p, T),
                    central_difference(&plog, p, T),
                    max_relative = 1e-6
                );
            }
        }
    }

    #[test]
    fn test_concentration_independence() {
        let c = DVector::from_vec(vec![0.1, 2.0, 3.5]);
        for rate in [plog(), ArrheniusPLOGRate::new(1.0, 0.0, 0.0)] {
            assert!(!rate.has_ddc());
            let mut ddc = DVector::from_element(3, 7.0);
            rate.ddc(1.0e3, 1200.0, &c, 0, &mut ddc);
            assert!(ddc.iter().all(|v| *v == 0.0));
        }
    }

    #[test]
    fn test_config_round_trip_keeps_sorted_order() {
        let ctx = RateContext::default();
        let mut shuffled = breakpoints();
        shuffled.reverse();
        let rows: Vec<[f64; 4]> = shuffled.iter().map(|e| e.to_row()).collect();
        let dict = json!({"A": 9.2e38, "beta": -9.43, "Ta": 7000.0, "ArrheniusData": rows});
        let built = ArrheniusPLOGRate::from_config(&dict, &ctx).unwrap();
        let written = built.to_config();
        assert_eq!(written["ArrheniusData"][0], json!([0.1, 9.2e38, -8.65, 7000.0]));
        let reread = ArrheniusPLOGRate::from_config(&written, &ctx).unwrap();
        assert_eq!(reread, built);
        assert_eq!(reread, plog());
    }

    #[test]
    fn test_text_round_trip() {
        let built = plog();
        let mut text = String::new();
        built.write(&mut text);
        let rows = parse_arrhenius_data(&text).unwrap();
        assert_eq!(rows, built.table().entries().to_vec());
        let reread = ArrheniusPLOGRate::with_table(9.2e38, -9.43, 7000.0, rows).unwrap();
        assert_eq!(reread, built);
    }

    #[test]
    fn test_interior_rate_is_weighted_geometric_mean() {
        // k = kl^a * kr^b with a + b = 1
        let plog = plog();
        for (p, pl, pr, il, ir) in [(5.0_f64, 1.0_f64, 10.0_f64, 1, 2), (42.0, 10.0, 100.0, 2, 3)] {
            let a = (pr.log10() - p.log10()) / (pr.log10() - pl.log10());
            let b = 1.0 - a;
            for T in [800.0, 1000.0, 1600.0] {
                let kl = plog.table().entries()[il].arrhenius.K_const(T);
                let kr = plog.table().entries()[ir].arrhenius.K_const(T);
                assert_relative_eq!(plog.rate(p, T), kl.powf(a) * kr.powf(b), max_relative = 1e-9);
            }
        }
    }

    #[test]
    fn test_nan_pressure_gives_nan() {
        let single =
            ArrheniusPLOGRate::with_table(1.0, 0.0, 0.0, vec![ArrheniusData::new(1.0, 2.0, 0.0, 0.0)])
                .unwrap();
        for rate in [plog(), single] {
            assert!(rate.rate(f64::NAN, 1000.0).is_nan());
            assert!(rate.ddT(f64::NAN, 1000.0).is_nan());
        }
        // without a table pressure is not used
        let fallback = ArrheniusPLOGRate::new(9.2e38, -9.43, 7000.0);
        assert_eq!(fallback.rate(f64::NAN, 1000.0), fallback.rate(1.0, 1000.0));
    }

    #[test]
    fn test_field_evaluation() {
        let plog = plog();
        let p = DVector::from_vec(vec![0.05, 1.0, 5.0, 1.0e6]);
        let T = DVector::from_vec(vec![900.0, 1000.0, 1100.0, 1200.0]);
        let mut k = DVector::zeros(4);
        let mut dk = DVector::zeros(4);
        plog.rate_field(&p, &T, &mut k);
        plog.ddT_field(&p, &T, &mut dk);
        for i in 0..4 {
            assert_eq!(k[i], plog.rate(p[i], T[i]));
            assert_eq!(dk[i], plog.ddT(p[i], T[i]));
        }
    }

    #[test]
    fn test_concurrent_evaluation() {
        let plog = plog();
        let pressures: Vec<f64> = (0..64).map(|i| 10f64.powf(-2.0 + i as f64 * 0.12)).collect();
        let sequential: Vec<f64> = pressures.iter().map(|p| plog.rate(*p, 1100.0)).collect();
        let parallel: Vec<Vec<f64>> = std::thread::scope(|s| {
            let handles: Vec<_> = pressures
                .chunks(16)
                .map(|chunk| {
                    let plog = &plog;
                    s.spawn(move || chunk.iter().map(|p| plog.rate(*p, 1100.0)).collect::<Vec<_>>())
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        assert_eq!(parallel.concat(), sequential);
    }

    #[test]
    fn test_dispatch_through_enum() {
        let ctx = RateContext::default();
        let dict = json!({
            "type": "ArrheniusPLOG",
            "A": 9.2e38, "beta": -9.43, "Ta": 7000.0,
            "ArrheniusData": [
                [100.0, 1.8e43, -8.78, 16800.0],
                [0.1, 9.2e38, -8.65, 7000.0],
                [1.0e5, 4.4e9, 1.45, 2400.0],
                [10.0, 1.5e45, -9.69, 15100.0],
                [1.0, 9.5e42, -9.43, 11200.0]
            ]
        });
        let rate = create_rate_from_dict(&dict, &ctx).unwrap();
        rate.pre_evaluate();
        assert_eq!(rate.rate(5.0, 1000.0), plog().rate(5.0, 1000.0));
        assert_eq!(rate.ddT(5.0, 1000.0), plog().ddT(5.0, 1000.0));
        rate.post_evaluate();
        assert_eq!(rate, ReactionRateEnum::from(plog()));
    }
}
