//! Favorable and unfavorable elements (용신/기신 direction) from body strength.

use saju_tables::Element;
use serde::Serialize;

use crate::pattern::BodyStrength;

/// Element advice for the day master.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ElementAdvice {
    Directed {
        favorable: Vec<Element>,
        unfavorable: Vec<Element>,
    },
    /// Balanced charts get no fixed sets; the choice depends on context.
    ContextDependent,
}

impl ElementAdvice {
    pub fn favorable(&self) -> &[Element] {
        match self {
            Self::Directed { favorable, .. } => favorable,
            Self::ContextDependent => &[],
        }
    }

    pub fn unfavorable(&self) -> &[Element] {
        match self {
            Self::Directed { unfavorable, .. } => unfavorable,
            Self::ContextDependent => &[],
        }
    }
}

/// A strong day master wants its output, wealth and authority; a weak one
/// wants resource and peers.
pub fn favorable_elements(day_element: Element, strength: BodyStrength) -> ElementAdvice {
    let draining = vec![
        day_element.generates(),
        day_element.restrains(),
        day_element.restrained_by(),
    ];
    let supporting = vec![day_element.generated_by(), day_element];
    if strength.is_strong() {
        ElementAdvice::Directed {
            favorable: draining,
            unfavorable: supporting,
        }
    } else if strength.is_weak() {
        ElementAdvice::Directed {
            favorable: supporting,
            unfavorable: draining,
        }
    } else {
        ElementAdvice::ContextDependent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strong_wood() {
        let advice = favorable_elements(Element::Wood, BodyStrength::Strong);
        assert_eq!(advice.favorable(), [Element::Fire, Element::Earth, Element::Metal]);
        assert_eq!(advice.unfavorable(), [Element::Water, Element::Wood]);
    }

    #[test]
    fn weak_inverts() {
        let advice = favorable_elements(Element::Fire, BodyStrength::MildlyWeak);
        assert_eq!(advice.favorable(), [Element::Wood, Element::Fire]);
        assert_eq!(advice.unfavorable(), [Element::Earth, Element::Metal, Element::Water]);
    }

    #[test]
    fn balanced_has_no_sets() {
        let advice = favorable_elements(Element::Metal, BodyStrength::Balanced);
        assert_eq!(advice, ElementAdvice::ContextDependent);
        assert!(advice.favorable().is_empty());
    }

    #[test]
    fn sets_partition_elements() {
        for e in saju_tables::ALL_ELEMENTS {
            let advice = favorable_elements(e, BodyStrength::Weak);
            let mut all: Vec<Element> = advice
                .favorable()
                .iter()
                .chain(advice.unfavorable())
                .copied()
                .collect();
            all.sort();
            assert_eq!(all, saju_tables::ALL_ELEMENTS.to_vec());
        }
    }
}
