use log::trace;

use crate::consts::MAX_ADDRESS;
use crate::error::GotoError;
use crate::models::RegionDef;

#[derive(Debug, Clone)]
struct RegionNode {
    offset: usize,
    length: usize,
    address: Option<u32>,
    disallow_inward: bool,
    disallow_outward: bool,
    parent: Option<usize>,
    /// Indices into `AddressMap::nodes`, sorted by offset
    children: Vec<usize>,
}

impl RegionNode {
    fn contains_offset(&self, offset: usize) -> bool {
        offset >= self.offset && offset < self.offset + self.length
    }
}

/// Maps file offsets to addresses through a tree of (possibly overlapping in
/// address space) regions.
///
/// Node 0 is a non-addressable root spanning the whole file. Address lookups
/// start from the region holding a reference offset, search downward first,
/// then climb toward the root. Isolation flags cut the search short.
#[derive(Debug, Clone)]
pub struct AddressMap {
    nodes: Vec<RegionNode>,
}

impl AddressMap {
    pub fn new(file_data_length: usize, regions: &[RegionDef]) -> Result<Self, GotoError> {
        let mut map = AddressMap {
            nodes: vec![RegionNode {
                offset: 0,
                length: file_data_length,
                address: None,
                disallow_inward: false,
                disallow_outward: false,
                parent: None,
                children: Vec::new(),
            }],
        };
        map.add_children(0, regions)?;
        Ok(map)
    }

    fn add_children(&mut self, parent: usize, regions: &[RegionDef]) -> Result<(), GotoError> {
        let mut sorted: Vec<&RegionDef> = regions.iter().collect();
        sorted.sort_by_key(|r| r.offset);

        let (parent_start, parent_end) = {
            let node = &self.nodes[parent];
            (node.offset, node.offset + node.length)
        };

        let mut prev_end = parent_start;
        for region in sorted {
            if region.length == 0 {
                return Err(GotoError::InvalidRegion(format!(
                    "region at +{:06X} has zero length",
                    region.offset
                )));
            }
            let end = region.end().ok_or_else(|| {
                GotoError::InvalidRegion(format!(
                    "region at +{:06X} with length {:#X} runs past the end of the file",
                    region.offset, region.length
                ))
            })?;
            if region.offset < parent_start || end > parent_end {
                return Err(GotoError::InvalidRegion(format!(
                    "region +{:06X}..+{:06X} lies outside its parent +{:06X}..+{:06X}",
                    region.offset, end, parent_start, parent_end
                )));
            }
            if region.offset < prev_end {
                return Err(GotoError::InvalidRegion(format!(
                    "region at +{:06X} overlaps a sibling",
                    region.offset
                )));
            }
            if let Some(address) = region.address {
                let fits = (address as usize)
                    .checked_add(region.length)
                    .is_some_and(|address_end| address_end <= MAX_ADDRESS as usize);
                if !fits {
                    return Err(GotoError::InvalidRegion(format!(
                        "region at +{:06X} runs past the end of the address space",
                        region.offset
                    )));
                }
            }
            prev_end = end;

            let index = self.nodes.len();
            self.nodes.push(RegionNode {
                offset: region.offset,
                length: region.length,
                address: region.address,
                disallow_inward: region.disallow_inward,
                disallow_outward: region.disallow_outward,
                parent: Some(parent),
                children: Vec::new(),
            });
            self.nodes[parent].children.push(index);
            self.add_children(index, &region.children)?;
        }
        Ok(())
    }

    pub fn file_data_length(&self) -> usize {
        self.nodes[0].length
    }

    pub fn region_count(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Deepest region holding `offset`; the root for offsets outside every region
    fn offset_to_node(&self, offset: usize) -> usize {
        let mut current = 0;
        'descend: loop {
            for &child in &self.nodes[current].children {
                if self.nodes[child].contains_offset(offset) {
                    current = child;
                    continue 'descend;
                }
            }
            return current;
        }
    }

    /// Address of the byte at `offset`, or `None` in non-addressable areas
    pub fn offset_to_address(&self, offset: usize) -> Option<u32> {
        if offset >= self.file_data_length() {
            return None;
        }
        let node = &self.nodes[self.offset_to_node(offset)];
        node.address.map(|base| base + (offset - node.offset) as u32)
    }

    /// Finds the offset that `address` refers to when seen from `src_offset`.
    ///
    /// With `ignore_isolation` set, inward/outward restrictions are skipped.
    pub fn address_to_offset(&self, src_offset: usize, address: u32, ignore_isolation: bool) -> Option<usize> {
        let mut start = self.offset_to_node(src_offset);
        let mut came_from = None;
        loop {
            if let Some(offset) = self.find_address(start, came_from, address, ignore_isolation) {
                trace!(
                    "address ${:06X} from +{:06X} -> +{:06X} (ignore_isolation={})",
                    address,
                    src_offset,
                    offset,
                    ignore_isolation
                );
                return Some(offset);
            }

            let node = &self.nodes[start];
            if node.disallow_outward && !ignore_isolation {
                trace!("search for ${:06X} stopped at isolated region +{:06X}", address, node.offset);
                return None;
            }
            match node.parent {
                Some(parent) => {
                    came_from = Some(start);
                    start = parent;
                }
                None => return None,
            }
        }
    }

    fn find_address(&self, index: usize, skip: Option<usize>, address: u32, ignore_isolation: bool) -> Option<usize> {
        let node = &self.nodes[index];
        for &child in &node.children {
            if Some(child) == skip {
                continue;
            }
            if self.nodes[child].disallow_inward && !ignore_isolation {
                continue;
            }
            if let Some(offset) = self.find_address(child, None, address, ignore_isolation) {
                return Some(offset);
            }
        }

        let base = node.address?;
        if address < base || (address - base) as usize >= node.length {
            return None;
        }
        let offset = node.offset + (address - base) as usize;
        // bytes covered by a child belong to the child's address space
        let covered = node
            .children
            .iter()
            .any(|&child| self.nodes[child].contains_offset(offset));
        (!covered).then_some(offset)
    }
}
