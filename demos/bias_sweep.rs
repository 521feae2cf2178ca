use cohort::{
    mean_group_size, solve, AbsDiff, BiasedMeanPairwise, BoundCost, GreedyCover, Powerset,
    SeqIndexer,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Seeded so the sweep is reproducible run to run.
    let mut rng = StdRng::seed_from_u64(7);
    let trials: Vec<Vec<f64>> = (0..8)
        .map(|_| {
            (0..8)
                .map(|_| (rng.random::<f64>() * 100.0).round() / 100.0)
                .collect()
        })
        .collect();

    println!("bias  avg groups  avg group size");
    let mut bias = 0.0_f64;
    while bias <= 2.0 + 1e-9 {
        let mut groups_total = 0.0;
        let mut size_total = 0.0;
        for universe in &trials {
            let cost = BoundCost::new(BiasedMeanPairwise::new(bias), &AbsDiff);
            let partition = solve(
                &GreedyCover::new(),
                &SeqIndexer,
                &Powerset,
                &cost,
                universe.clone(),
            )?;
            groups_total += partition.len() as f64;
            size_total += mean_group_size(&partition);
        }
        println!(
            "{bias:>4.2}  {:>10.2}  {:>14.2}",
            groups_total / trials.len() as f64,
            size_total / trials.len() as f64
        );
        bias += 0.2;
    }

    Ok(())
}
