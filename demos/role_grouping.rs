use cohort::{
    group_costs, solve, BiasedMeanPairwise, BoundCost, GreedyCover, MatrixMetric, Powerset,
    SeqIndexer,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Ten team responsibilities and how connected each pair is in
    // practice, on a 0-5 scale (5 = same person could own both).
    // Lower-triangle: row i holds affinities to responsibilities 0..=i.
    let names = [
        "Fundraising",
        "Sponsors",
        "Finance",
        "Social",
        "Events",
        "Newsletter",
        "Partners",
        "Media",
        "Website",
        "Design",
    ];
    let affinity = vec![
        vec![5.0],
        vec![4.0, 5.0],
        vec![3.0, 2.0, 5.0],
        vec![1.0, 2.0, 0.0, 5.0],
        vec![1.0, 3.0, 0.0, 2.0, 5.0],
        vec![0.0, 2.0, 0.0, 4.0, 1.0, 5.0],
        vec![1.0, 3.0, 0.0, 1.0, 3.0, 2.0, 5.0],
        vec![0.0, 1.0, 0.0, 4.0, 3.0, 3.0, 1.0, 5.0],
        vec![1.0, 1.0, 0.0, 3.0, 2.0, 3.0, 2.0, 3.0, 5.0],
        vec![0.0, 0.0, 0.0, 2.0, 1.0, 2.0, 0.0, 4.0, 3.0, 5.0],
    ];

    let metric = MatrixMetric::from_affinity(affinity, 5.0)?;
    let roles: Vec<usize> = (0..names.len()).collect();

    // Sweep the bias: low bias keeps responsibilities separate, high
    // bias merges them into fewer, broader portfolios.
    for bias in [1.0, 1.5, 2.0, 2.5, 3.0] {
        let cost = BoundCost::new(BiasedMeanPairwise::new(bias), &metric);
        let partition = solve(
            &GreedyCover::new(),
            &SeqIndexer,
            &Powerset,
            &cost,
            roles.clone(),
        )?;

        // Report each group's unbiased cohesion so sweeps compare.
        let unbiased = BoundCost::new(BiasedMeanPairwise::new(0.0), &metric);
        let costs = group_costs(&partition, &unbiased);

        println!(
            "bias {bias}: {} groups, total cost {:.3}",
            partition.len(),
            costs.iter().sum::<f64>()
        );
        for (group, group_cost) in partition.iter().zip(&costs) {
            let labels: Vec<&str> = group.iter().map(|&i| names[i]).collect();
            println!("  {labels:?} : {group_cost:.2}");
        }
        println!();
    }

    Ok(())
}
