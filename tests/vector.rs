use num::Complex;
use qualvec::{AlgebraError, Matrix, Vector, gates};

fn v(values: &[f64]) -> Vector {
	Vector::from_real(values).unwrap()
}

#[test]
fn construction() {
	let vector = Vector::new(vec![Complex::new(1.0, 2.0), Complex::from(3.0)]).unwrap();
	assert_eq!(vector.dimension(), 2);
	assert_eq!(vector[0], Complex::new(1.0, 2.0));
	assert_eq!(vector.get(1), Some(Complex::from(3.0)));
	assert_eq!(vector.get(2), None);

	let zero = Vector::zero(3).unwrap();
	assert_eq!(zero.values(), &[Complex::from(0.0); 3]);

	assert_eq!(Vector::new(vec![]), Err(AlgebraError::EmptyOperands));
	assert_eq!(Vector::zero(0), Err(AlgebraError::EmptyOperands));
}

#[test]
fn clone_is_independent() {
	let a = v(&[1.0, 2.0]);
	let b = a.clone();
	let b = b.multiply(Complex::from(3.0));
	assert!(a.equals(&v(&[1.0, 2.0]), None));
	assert!(b.equals(&v(&[3.0, 6.0]), None));
}

#[test]
fn conjugate() {
	let a = Vector::new(vec![Complex::new(1.0, 2.0), Complex::new(-3.0, -4.0)]).unwrap();
	let expected = Vector::new(vec![Complex::new(1.0, -2.0), Complex::new(-3.0, 4.0)]).unwrap();
	assert!(a.conjugate().equals(&expected, None));
}

#[test]
fn add_checks_lengths() {
	assert!(v(&[1.0, 2.0]).add(&v(&[3.0, 4.0])).unwrap().equals(&v(&[4.0, 6.0]), None));
	assert_eq!(
		v(&[1.0, 2.0]).add(&v(&[1.0, 2.0, 3.0])),
		Err(AlgebraError::DimensionMismatch { expected: 2, found: 3 })
	);
}

#[test]
fn multiply() {
	assert!(v(&[1.0, -2.0]).multiply(Complex::i()).equals(
		&Vector::new(vec![Complex::new(0.0, 1.0), Complex::new(0.0, -2.0)]).unwrap(),
		None
	));
	assert!(v(&[1.0, 2.0, 3.0]).multiply_elementwise(&v(&[1.0, 2.0, 3.0])).unwrap().equals(&v(&[1.0, 4.0, 9.0]), None));
	assert!(v(&[1.0]).multiply_elementwise(&v(&[1.0, 2.0])).is_err());
}

#[test]
fn tensor_product_layout() {
	let a = v(&[1.0, 2.0, 3.0]);
	let b = v(&[1.0, 2.0, 3.0]);
	assert!(a.tensor_product(&b).equals(&v(&[1.0, 2.0, 3.0, 2.0, 4.0, 6.0, 3.0, 6.0, 9.0]), None));

	let a = Vector::new(vec![Complex::new(1.0, 1.0), Complex::from(2.0)]).unwrap();
	let b = v(&[3.0, 5.0, 7.0]);
	let product = a.tensor_product(&b);
	assert_eq!(product.dimension(), 6);
	for i in 0..a.dimension() {
		for j in 0..b.dimension() {
			assert_eq!(product[i * b.dimension() + j], a[i] * b[j]);
		}
	}

	// Not commutative
	assert!(!product.equals(&b.tensor_product(&a), None));
}

#[test]
fn repeated_tensor_products() {
	let zero = v(&[1.0, 0.0]);
	assert!(Vector::tensor_product_n(&zero, 0).equals(&zero, None));
	assert!(Vector::tensor_product_n(&zero, 1).equals(&zero, None));
	let three = Vector::tensor_product_n(&zero, 3);
	assert_eq!(three.dimension(), 8);
	assert_eq!(three[0], Complex::from(1.0));
	assert!(three.values()[1..].iter().all(|z| *z == Complex::from(0.0)));

	let folded = Vector::tensor_product_all(&[&v(&[1.0, 2.0]), &v(&[3.0]), &v(&[1.0, -1.0])]).unwrap();
	assert!(folded.equals(&v(&[3.0, -3.0, 6.0, -6.0]), None));
	assert_eq!(Vector::tensor_product_all(&[]), Err(AlgebraError::EmptyOperands));
}

#[test]
fn inner_product_conjugates_rhs() {
	let a = Vector::new(vec![Complex::new(1.0, 1.0), Complex::from(2.0)]).unwrap();
	let b = Vector::new(vec![Complex::new(0.0, 1.0), Complex::from(1.0)]).unwrap();
	// (1+i)(-i) + 2*1
	assert_eq!(a.inner_product(&b), Ok(Complex::new(3.0, -1.0)));
	assert!(a.inner_product(&v(&[1.0])).is_err());
}

#[test]
fn orthogonality() {
	assert!(v(&[1.0, 0.0]).is_orthogonal(&v(&[0.0, 1.0]), None).unwrap());
	assert!(!v(&[1.0, 1.0]).is_orthogonal(&v(&[0.0, 1.0]), None).unwrap());
	assert!(v(&[1.0, 1e-12]).is_orthogonal(&v(&[0.0, 1.0]), Some(1e-9)).unwrap());
	assert!(v(&[1.0, 0.0]).is_orthogonal(&v(&[0.0, 1.0, 0.0]), None).is_err());
}

#[test]
fn norm_does_not_modify() {
	let a = v(&[3.0, 4.0]);
	assert_eq!(a.norm(), 5.0);
	assert!(a.equals(&v(&[3.0, 4.0]), None));
	assert!(!a.is_unit(None));
	assert!(v(&[0.6, 0.8]).is_unit(Some(1e-12)));
	assert!(v(&[0.0, 1.0]).is_unit(None));
}

#[test]
fn apply_matrix() {
	let a = v(&[1.0, 2.0]);
	assert!(a.apply(&gates::pauli_x()).unwrap().equals(&v(&[2.0, 1.0]), None));

	let rectangular = Matrix::from_real(&[vec![1.0, 1.0], vec![1.0, -1.0], vec![2.0, 0.0]]).unwrap();
	assert!(a.apply(&rectangular).unwrap().equals(&v(&[3.0, -1.0, 2.0]), None));

	assert_eq!(
		v(&[1.0, 2.0, 3.0]).apply(&gates::pauli_x()),
		Err(AlgebraError::DimensionMismatch { expected: 3, found: 2 })
	);
}

#[test]
fn equals_tolerance() {
	let a = v(&[1.0, 2.0]);
	let b = v(&[1.0, 2.001]);
	assert!(!a.equals(&b, None));
	assert!(a.equals(&b, Some(0.01)));
	assert!(!a.equals(&v(&[1.0, 2.0, 0.0]), Some(1.0)));
}
