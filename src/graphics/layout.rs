use std::mem::size_of;

/// Interleaved layout of `f32` vertex attributes, bound to consecutive
/// locations starting from 0
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexLayout {
    components: Vec<i32>,
}

impl VertexLayout {
    /// `components` holds the number of floats of each attribute, in order
    pub fn new(components: &[i32]) -> Self {
        debug_assert!(components.iter().all(|&c| (1..=4).contains(&c)));
        Self {
            components: components.to_vec(),
        }
    }

    /// Size in bytes of a single vertex
    pub fn stride(&self) -> usize {
        self.floats_per_vertex() * size_of::<f32>()
    }

    pub fn floats_per_vertex(&self) -> usize {
        self.components.iter().map(|&c| c as usize).sum()
    }

    /// Number of whole vertices stored in `floats` floats
    pub fn vertex_count(&self, floats: usize) -> usize {
        floats / self.floats_per_vertex().max(1)
    }

    /// Iterates over `(location, components, byte offset)`
    pub fn attributes(&self) -> impl Iterator<Item = (u32, i32, usize)> + '_ {
        self.components
            .iter()
            .scan(0usize, |offset, &components| {
                let start = *offset;
                *offset += components as usize * size_of::<f32>();
                Some((components, start))
            })
            .enumerate()
            .map(|(location, (components, offset))| (location as u32, components, offset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_color_texcoord() {
        let layout = VertexLayout::new(&[3, 3, 2]);
        assert_eq!(layout.stride(), 32);
        assert_eq!(
            layout.attributes().collect::<Vec<_>>(),
            vec![(0, 3, 0), (1, 3, 12), (2, 2, 24)]
        );
        assert_eq!(layout.vertex_count(32), 4);
    }

    #[test]
    fn single_attribute() {
        let layout = VertexLayout::new(&[3]);
        assert_eq!(layout.stride(), 12);
        assert_eq!(layout.attributes().collect::<Vec<_>>(), vec![(0, 3, 0)]);
        assert_eq!(layout.vertex_count(9), 3);
        // partial vertices are not counted
        assert_eq!(layout.vertex_count(10), 3);
    }
}
