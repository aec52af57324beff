use crate::entities::{Aabb, Alien, Arena, Bullet};

/// What a bullet/alien pass destroyed, as arena indices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hits {
    pub bullets: Vec<usize>,
    pub aliens: Vec<usize>,
}

impl Hits {
    pub fn is_empty(&self) -> bool {
        self.bullets.is_empty() && self.aliens.is_empty()
    }
}

/// Every overlapping (bullet, alien) pair, ordered by bullet then alien index.
pub fn overlapping_pairs(bullets: &Arena<Bullet>, aliens: &Arena<Alien>) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for (bi, bullet) in bullets.iter() {
        for (ai, alien) in aliens.iter() {
            if bullet.rect.intersects(&alien.rect) {
                pairs.push((bi, ai));
            }
        }
    }
    pairs
}

/// Resolve pairs in order. An alien is destroyed once, by the first bullet
/// that reaches it; a bullet is spent only if it destroyed something.
pub fn resolve(pairs: &[(usize, usize)]) -> Hits {
    let mut hits = Hits::default();
    for &(bi, ai) in pairs {
        if hits.aliens.contains(&ai) {
            continue;
        }
        hits.aliens.push(ai);
        if !hits.bullets.contains(&bi) {
            hits.bullets.push(bi);
        }
    }
    hits
}

/// Find, resolve and remove hits in one batch.
pub fn bullet_alien_collisions(bullets: &mut Arena<Bullet>, aliens: &mut Arena<Alien>) -> Hits {
    let hits = resolve(&overlapping_pairs(bullets, aliens));
    for &bi in &hits.bullets {
        bullets.remove(bi);
    }
    for &ai in &hits.aliens {
        aliens.remove(ai);
    }
    hits
}

pub fn any_overlap<'a>(rect: &Aabb, mut others: impl Iterator<Item = &'a Aabb>) -> bool {
    others.any(|other| rect.intersects(other))
}
