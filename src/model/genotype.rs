use strum::IntoEnumIterator;
use strum_macros::{EnumIter, IntoStaticStr};

/// Size of the diploid genotype alphabet.
pub const GENOTYPE_STATES: usize = 10;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, IntoStaticStr)]
pub enum Nucleotide {
    A,
    C,
    G,
    T,
}

/// The ten unphased diploid genotypes, in canonical order: the four
/// homozygous states first, then the six heterozygous ones. Observed state
/// masks index into this order, so it must not be rearranged.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, EnumIter, IntoStaticStr, Serialize, Deserialize,
)]
pub enum Genotype {
    AA,
    CC,
    GG,
    TT,
    AC,
    AG,
    AT,
    CG,
    CT,
    GT,
}

impl Genotype {
    pub fn from_index(index: usize) -> Option<Self> {
        Self::iter().nth(index)
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// The two alleles, in nucleotide order.
    pub fn alleles(self) -> [Nucleotide; 2] {
        use Nucleotide::*;
        match self {
            Genotype::AA => [A, A],
            Genotype::CC => [C, C],
            Genotype::GG => [G, G],
            Genotype::TT => [T, T],
            Genotype::AC => [A, C],
            Genotype::AG => [A, G],
            Genotype::AT => [A, T],
            Genotype::CG => [C, G],
            Genotype::CT => [C, T],
            Genotype::GT => [G, T],
        }
    }

    /// Both alleles equal. The error model formulas branch on this, since
    /// allelic dropout can only turn a heterozygous truth into an apparently
    /// homozygous observation, never the reverse.
    pub fn is_homozygous(self) -> bool {
        match self {
            Genotype::AA | Genotype::CC | Genotype::GG | Genotype::TT => true,
            _ => false,
        }
    }

    pub fn is_heterozygous(self) -> bool {
        !self.is_homozygous()
    }

    /// Number of single-allele substitutions separating two genotypes
    /// (0, 1 or 2). Symmetric, zero on the diagonal.
    pub fn mut_dist(self, other: Genotype) -> u8 {
        MUT_DIST[self.index()][other.index()]
    }

    /// Multiset overlap of the two allele pairs. Relies on `alleles`
    /// returning sorted pairs.
    fn shared_alleles(self, other: Genotype) -> u8 {
        let a = self.alleles();
        let b = other.alleles();
        let mut shared = 0;
        let (mut i, mut j) = (0, 0);
        while i < 2 && j < 2 {
            if a[i] == b[j] {
                shared += 1;
                i += 1;
                j += 1;
            } else if a[i] < b[j] {
                i += 1;
            } else {
                j += 1;
            }
        }
        shared
    }
}

lazy_static! {
    static ref MUT_DIST: [[u8; GENOTYPE_STATES]; GENOTYPE_STATES] = {
        let mut dist = [[0u8; GENOTYPE_STATES]; GENOTYPE_STATES];
        for a in Genotype::iter() {
            for b in Genotype::iter() {
                dist[a.index()][b.index()] = 2 - a.shared_alleles(b);
            }
        }
        dist
    };
}
