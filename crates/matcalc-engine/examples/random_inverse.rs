use matcalc_engine::{determinant, inverse, random_matrix, verify_inverse, RandomSpec};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() {
    env_logger::init();

    // Seeded so repeated runs print the same matrices
    let mut rng = StdRng::seed_from_u64(2024);
    let a = random_matrix(&mut rng, 4, 4, &RandomSpec::default())
        .expect("failed to generate matrix");

    println!("A =\n{:.4}", a);

    let det = determinant(&a).expect("A is square");
    println!("det(A) = {:.4}", det);

    match inverse(&a) {
        Ok(inv) => {
            println!("A⁻¹ =\n{:.4}", inv);
            let report = verify_inverse(&a, &inv).expect("shapes match");
            println!(
                "A × A⁻¹ ≈ I: {} (max error {:.2e})",
                report.is_correct, report.max_error
            );
        }
        Err(e) => println!("A is not invertible: {}", e),
    }
}
