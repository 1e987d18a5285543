use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use smtx::{Catalog, CatalogConfig, Error, MatrixError, MatrixFile, Operation, SparseMatrix};
use std::fs;
use tempfile::tempdir;

fn random_matrix(rng: &mut StdRng, rows: usize, cols: usize, nnz: usize) -> SparseMatrix {
    let mut matrix: SparseMatrix = SparseMatrix::new(rows, cols);
    for _ in 0..nnz {
        let row = rng.gen_range(0..rows);
        let col = rng.gen_range(0..cols);
        matrix
            .set_element(row, col, rng.gen_range(-1000..=1000))
            .unwrap();
    }
    matrix
}

#[test]
fn test_scenarios_through_files() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();
    let write = |name: &str, text: &str| fs::write(input.path().join(name), text).unwrap();
    write("matrix_a.txt", "rows=2\ncols=2\n(0,0,1)\n(1,1,2)\n");
    write("matrix_b.txt", "rows=2\ncols=2\n(0,0,3)\n(0,1,4)\n");

    let config = CatalogConfig::with_input_dir(input.path()).with_output_dir(output.path());
    let catalog = Catalog::scan(&config.input_dir, &config).unwrap();
    assert_eq!(catalog.recommend(Operation::Addition), vec![(0, 1), (1, 0)]);

    let a: SparseMatrix = catalog.load(0).unwrap();
    let b: SparseMatrix = catalog.load(1).unwrap();

    let sum = smtx::add(&a, &b).unwrap();
    MatrixFile::write(config.result_path(Operation::Addition), &sum).unwrap();
    assert_eq!(
        fs::read_to_string(output.path().join("result_addition.txt")).unwrap(),
        "rows=2\ncols=2\n(0, 0, 4)\n(0, 1, 4)\n(1, 1, 2)"
    );

    let difference = smtx::subtract(&a, &b).unwrap();
    MatrixFile::write(config.result_path(Operation::Subtraction), &difference).unwrap();
    assert_eq!(
        fs::read_to_string(output.path().join("result_subtraction.txt")).unwrap(),
        "rows=2\ncols=2\n(0, 0, -2)\n(0, 1, -4)\n(1, 1, 2)"
    );
}

#[test]
fn test_random_round_trip_through_files() {
    let dir = tempdir().unwrap();
    let mut rng = StdRng::seed_from_u64(99);

    for i in 0..10 {
        let rows = rng.gen_range(1..50);
        let cols = rng.gen_range(1..50);
        let matrix = random_matrix(&mut rng, rows, cols, 60);
        let path = dir.path().join(format!("matrix{i}.txt"));

        MatrixFile::write(&path, &matrix).unwrap();
        assert_eq!(MatrixFile::read::<i64, _>(&path).unwrap(), matrix);
        assert_eq!(MatrixFile::open(&path).unwrap().shape, matrix.shape());
    }
}

#[test]
fn test_incompatible_files_are_reported() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("matrix1.txt"), "rows=2\ncols=3\n(0,0,1)").unwrap();
    fs::write(dir.path().join("matrix2.txt"), "rows=2\ncols=3\n(1,2,1)").unwrap();

    let catalog = Catalog::scan(dir.path(), &CatalogConfig::default()).unwrap();
    assert!(catalog.recommend(Operation::Multiplication).is_empty());

    let a: SparseMatrix = catalog.load(0).unwrap();
    let b: SparseMatrix = catalog.load(1).unwrap();
    let err: Error = smtx::multiply(&a, &b).unwrap_err().into();

    assert_eq!(err.operation(), Some(Operation::Multiplication));
    assert!(matches!(
        err,
        Error::Matrix {
            source: MatrixError::DimensionMismatch { .. },
            ..
        }
    ));
}
