use lowdim::{KruskalStress, MDS, Matrix, SammonStress, SignedRelativeStress, StressFunc};
use ndarray::array;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Multidimensional Scaling (SMACOF) ===\n");

    // Target dissimilarities between 6 items: two tight groups of three,
    // far apart from each other.
    let distances = array![
        [0.0, 1.0, 1.0, 8.0, 8.0, 8.0],
        [1.0, 0.0, 1.0, 8.0, 8.0, 8.0],
        [1.0, 1.0, 0.0, 8.0, 8.0, 8.0],
        [8.0, 8.0, 8.0, 0.0, 1.0, 1.0],
        [8.0, 8.0, 8.0, 1.0, 0.0, 1.0],
        [8.0, 8.0, 8.0, 1.0, 1.0, 0.0]
    ];

    println!(
        "Target distance matrix: {} items, embedding into 2 dimensions\n",
        distances.nrows()
    );

    println!("=== Basic optimization ===");
    match run_basic(&distances) {
        Ok(msg) => println!("{}", msg),
        Err(e) => println!("Optimization failed: {}", e),
    }

    println!("\n=== Comparing stress functions ===");
    println!("Different stress functions weight errors differently:");
    println!("{:<25} {:>15}", "Stress function", "Average stress");
    println!("{}", "-".repeat(42));

    for (name, fun) in [
        ("Kruskal", &KruskalStress as &dyn StressFunc),
        ("Sammon", &SammonStress),
        ("Signed relative", &SignedRelativeStress),
    ] {
        match score_with(&distances, fun) {
            Ok(stress) => println!("{:<25} {:>15.6}", name, stress),
            Err(e) => println!("{:<25} failed: {}", name, e),
        }
    }

    println!("\n=== Custom stress function ===");
    // Any closure over (current, target, weight) works as a stress function
    let absolute = |current: f64, target: f64, weight: f64| (current - target).abs() * weight;
    match score_with(&distances, &absolute) {
        Ok(stress) => println!("Mean absolute error stress: {:.6}", stress),
        Err(e) => println!("Custom stress failed: {}", e),
    }

    println!("\n=== Progress reporting and cancellation ===");
    run_with_progress(&distances)?;

    println!("\n=== Practical Use Cases ===");
    println!("• Visualizing dissimilarity data (surveys, sequence distances) in 2D");
    println!("• Embedding items for which only pairwise distances are known");
    println!("• Sanity-checking clustering output against a planar layout");

    Ok(())
}

fn run_basic(distances: &Matrix) -> Result<String, String> {
    let mut mds = MDS::new(distances, 2)?;
    mds.randomize_points(Some(42));

    mds.refresh_distances();
    let initial = mds.evaluate_stress(Some(&SignedRelativeStress));

    let outcome = mds.optimize(300);
    let final_stress = mds.average_stress();

    let mut lines = format!(
        "Outcome: {:?}, stress {:.6} -> {:.6}\nEmbedding:\n",
        outcome, initial, final_stress
    );
    for (i, row) in mds.points().rows().into_iter().enumerate() {
        lines.push_str(&format!("  item {}: ({:8.4}, {:8.4})\n", i, row[0], row[1]));
    }
    Ok(lines)
}

fn score_with(distances: &Matrix, fun: &dyn StressFunc) -> Result<f64, String> {
    let mut mds = MDS::new(distances, 2)?;
    mds.randomize_points(Some(42));
    mds.optimize_with(300, fun, 1e-4, None);
    Ok(mds.average_stress())
}

fn run_with_progress(distances: &Matrix) -> Result<(), String> {
    let mut mds = MDS::new(distances, 2)?;
    mds.randomize_points(Some(7));

    let mut report = |done: f64| {
        if (done * 100.0) as u32 % 25 == 0 {
            println!("  {:3.0}% of iteration budget spent", done * 100.0);
        }
        true
    };
    let outcome = mds.optimize_with(200, &SignedRelativeStress, 1e-6, Some(&mut report));
    println!("Finished: {:?}, final stress {:.6}", outcome, mds.average_stress());
    Ok(())
}
