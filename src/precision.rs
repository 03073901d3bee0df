//! Скалярный тип повышенной точности
//!
//! Все ядра считают в `TwoFloat` (double-double, ~106 бит мантиссы).

pub use twofloat::TwoFloat;

/// Скаляр, в котором выполняются все вычисления
pub type Extended = TwoFloat;

/// Аддитивная единица
#[inline]
pub fn zero() -> Extended {
    Extended::from(0.0)
}

/// Мультипликативная единица
#[inline]
pub fn one() -> Extended {
    Extended::from(1.0)
}

/// Расширяет `f64` до повышенной точности (без потерь)
#[inline]
pub fn widen(value: f64) -> Extended {
    Extended::from(value)
}

/// Сужает значение до `f64` для вывода
#[inline]
pub fn narrow(value: Extended) -> f64 {
    f64::from(value)
}

/// Деление в полной точности double-double.
///
/// Оператор `/` у `TwoFloat` теряет младшую часть частного, поэтому
/// частное набирается делением в столбик из трех слагаемых.
#[inline]
pub fn div(lhs: Extended, rhs: Extended) -> Extended {
    let q1 = lhs.hi() / rhs.hi();
    let r = lhs - rhs * widen(q1);
    let q2 = r.hi() / rhs.hi();
    let r = r - rhs * widen(q2);
    let q3 = r.hi() / rhs.hi();
    widen(q1) + widen(q2) + widen(q3)
}

/// Квадратный корень в повышенной точности
#[inline]
pub fn sqrt(value: Extended) -> Extended {
    // ноль возвращаем как есть, без итераций twofloat
    if value.hi() == 0.0 {
        return zero();
    }
    value.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_bits_beyond_f64() {
        // 1 + 2^-80 не представимо в f64, но сохраняется в младшей части
        let tiny = widen(2f64.powi(-80));
        let sum = one() + tiny;
        assert_eq!(narrow(sum), 1.0);
        assert_eq!(sum - one(), tiny);
    }

    #[test]
    fn div_keeps_extended_precision() {
        let third = div(one(), widen(3.0));
        assert!((third * widen(3.0) - one()).abs() < widen(1e-30));

        let q = div(widen(2.0), widen(7.0));
        assert!((q * widen(7.0) - widen(2.0)).abs() < widen(1e-30));
        assert_eq!(div(widen(-6.0), widen(4.0)), widen(-1.5));
    }

    #[test]
    fn sqrt_of_perfect_square() {
        let root = sqrt(widen(9.0));
        assert!((root - widen(3.0)).abs() < widen(1e-30));
        assert_eq!(sqrt(zero()), zero());
    }
}
