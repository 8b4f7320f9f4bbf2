use std::collections::BTreeMap;

use log::{debug, warn};
use serde::Serialize;

use crate::{ellipse::EllipseGeometry, error::{ConfigError, DomainError, Error}, hull::{compute_hull, Hull}, item::SourceItem, mode::PlotCoordinateMode};

/// An item left off the chart because it couldn't be placed in display space.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Skipped {
    /// Position among the items converted together (within its family, for [`family_hull`]).
    pub index: usize,
    pub label: String,
    #[serde(serialize_with = "serialize_display")]
    pub error: DomainError,
}

fn serialize_display<S: serde::Serializer>(error: &DomainError, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(error)
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Converted {
    pub ellipses: Vec<EllipseGeometry>,
    pub skipped: Vec<Skipped>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FamilyHull {
    pub family: String,
    pub hull: Hull,
    pub skipped: Vec<Skipped>,
}

/// Items grouped by family name; input order is kept within each family.
pub fn group_by_family<'a, I>(items: I) -> BTreeMap<&'a str, Vec<&'a SourceItem>>
where
    I: IntoIterator<Item = &'a SourceItem>,
{
    let mut families: BTreeMap<&str, Vec<&SourceItem>> = BTreeMap::new();
    for item in items {
        families.entry(item.family.as_str()).or_default().push(item);
    }
    families
}

/// Items placed in display space, each with its position among the items converted together.
type Placed<'a> = Vec<(usize, &'a SourceItem, EllipseGeometry)>;

fn skip(index: usize, item: &SourceItem, error: DomainError) -> Skipped {
    warn!("Skipping item {} ({}): {}", index, item, error);
    Skipped { index, label: item.label.clone(), error }
}

fn place<'a, I>(items: I, mode: &PlotCoordinateMode) -> Result<(Placed<'a>, Vec<Skipped>), ConfigError>
where
    I: IntoIterator<Item = &'a SourceItem>,
{
    mode.validate()?;
    let mut placed = Vec::new();
    let mut skipped = Vec::new();
    for (index, item) in items.into_iter().enumerate() {
        match EllipseGeometry::convert(item, mode) {
            Ok(ellipse) => placed.push((index, item, ellipse)),
            Err(Error::Domain(error)) => skipped.push(skip(index, item, error)),
            Err(Error::Config(error)) => return Err(error),
        }
    }
    Ok((placed, skipped))
}

/// Convert every item, setting aside (and logging) the ones with no valid display geometry.
///
/// Configuration errors apply to every item, and are returned instead.
pub fn convert_all<'a, I>(items: I, mode: &PlotCoordinateMode) -> Result<Converted, ConfigError>
where
    I: IntoIterator<Item = &'a SourceItem>,
{
    let (placed, skipped) = place(items, mode)?;
    let ellipses = placed.into_iter().map(|(_, _, ellipse)| ellipse).collect();
    Ok(Converted { ellipses, skipped })
}

/// Hull of one family's items; `family` is used for labeling only.
///
/// An item whose ellipse can't be sampled under `mode` (e.g. its expanded boundary overflows) joins
/// `skipped`, and the hull is built from the remaining items.
pub fn family_hull<'a, I>(family: &str, items: I, mode: &PlotCoordinateMode) -> Result<FamilyHull, ConfigError>
where
    I: IntoIterator<Item = &'a SourceItem>,
{
    let (mut placed, mut skipped) = place(items, mode)?;
    let hull = loop {
        let ellipses: Vec<EllipseGeometry> = placed.iter().map(|(_, _, ellipse)| *ellipse).collect();
        match compute_hull(&ellipses, mode) {
            Ok(hull) => break hull,
            Err(Error::Config(error)) => return Err(error),
            Err(Error::Domain(DomainError::InvalidEllipse { index, source })) => {
                let (index, item, _) = placed.remove(index);
                skipped.push(skip(index, item, *source));
            }
            Err(Error::Domain(error)) => {
                for (index, item, _) in placed.drain(..) {
                    skipped.push(skip(index, item, error.clone()));
                }
                break Hull::Empty;
            }
        }
    };
    skipped.sort_by_key(|s| s.index);
    debug!("Family {}: {} ellipses, {} skipped, {} hull vertices", family, placed.len(), skipped.len(), hull.len());
    Ok(FamilyHull { family: family.to_string(), hull, skipped })
}

/// One hull per family, sorted by family name.
pub fn family_hulls(items: &[SourceItem], mode: &PlotCoordinateMode) -> Result<Vec<FamilyHull>, ConfigError> {
    group_by_family(items)
        .into_iter()
        .map(|(family, items)| family_hull(family, items, mode))
        .collect()
}
