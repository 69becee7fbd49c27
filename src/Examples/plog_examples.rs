use crate::Kinetics::plog_rate::ArrheniusPLOGRate;
use crate::Kinetics::rate_config::RateContext;
use crate::Kinetics::reaction_rate::{ReactionRate, create_rate_from_dict};
use log::error;
use serde_json::json;

pub fn plog_examples(plogtask: usize) {
    let ctx = RateContext::default();
    let dict = json!({
        "type": "ArrheniusPLOG",
        "A": 9.2e38,
        "beta": -9.43,
        "Ta": 7000.0,
        "ArrheniusData": [
            [0.1, 9.2e38, -8.65, 7000.0],
            [1.0, 9.5e42, -9.43, 11200.0],
            [10.0, 1.5e45, -9.69, 15100.0],
            [100.0, 1.8e43, -8.78, 16800.0],
            [1.0e5, 4.4e9, 1.45, 2400.0]
        ]
    });
    match plogtask {
        0 => {
            // rate constants and derivatives across the tabulated pressure range
            let plog = match ArrheniusPLOGRate::from_config(&dict, &ctx) {
                Ok(plog) => plog,
                Err(e) => {
                    error!("{}", e);
                    return;
                }
            };
            plog.pretty_print();
            let T = 1000.0;
            for p in [0.05, 0.1, 0.5, 1.0, 5.0, 50.0, 1.0e3, 1.0e5, 1.0e6] {
                println!(
                    "p = {:>8}, T = {}: k = {:e}, dk/dT = {:e}",
                    p,
                    T,
                    plog.rate(p, T),
                    plog.ddT(p, T)
                );
            }
            let mut text = String::new();
            plog.write(&mut text);
            println!("{}", text);
        }
        1 => {
            // rate law picked by its type name, rates over a temperature range at fixed pressure
            let rate = match create_rate_from_dict(&dict, &ctx) {
                Ok(rate) => rate,
                Err(e) => {
                    error!("{}", e);
                    return;
                }
            };
            println!("{} selected", rate.type_name());
            if let crate::Kinetics::reaction_rate::ReactionRateEnum::ArrheniusPLOG(plog) = &rate {
                println!("k(5, 1000) = {:e}", rate.rate(5.0, 1000.0));
                let ks = plog.K_const_for_T_range(5.0, 800.0, 2000.0, 6);
                println!("k for T in [800, 2000): {:?}", ks);
            }
        }
        _ => println!("Invalid task number"),
    }
}
