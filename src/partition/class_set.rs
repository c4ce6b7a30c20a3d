use crate::partition::Class;

/// ClassSet maintains a total assignment of nodes to classes, with O(1) move/find
/// and O(1) access to the members of each class.
#[derive(Debug, Clone)]
pub(crate) struct ClassSet {
    members: [Vec<usize>; Class::COUNT],  // members[c] = nodes currently in class c
    class: Vec<Class>,                    // class[n] = c when n is in members[c]
    position: Vec<usize>,                 // position[n] = i when members[c][i] is n
}

impl ClassSet {
    /// Create a ClassSet over `num_nodes` nodes, initially all `Neutral`.
    pub(crate) fn new(num_nodes: usize) -> Self {
        let mut members: [Vec<usize>; Class::COUNT] = std::array::from_fn(|_| Vec::new());
        members[Class::Neutral.index()] = (0..num_nodes).collect();

        Self {
            members,
            class: vec![Class::Neutral; num_nodes],
            position: (0..num_nodes).collect(),
        }
    }

    /// Universe size (number of nodes addressable by index).
    #[inline] pub(crate) fn len(&self) -> usize { self.class.len() }

    /// Return the class that `node` is currently in.
    #[inline]
    pub(crate) fn find(&self, node: usize) -> Class {
        debug_assert!(node < self.class.len(), "node out of range");
        self.class[node]
    }

    /// Returns the nodes currently in `class`, in no particular order.
    #[inline] pub(crate) fn get(&self, class: Class) -> &[usize] { &self.members[class.index()] }

    /// Complete vector of classes, indexed by node.
    #[inline] pub(crate) fn assignments(&self) -> &[Class] { &self.class }

    /// Move every node back to `Neutral`.
    pub(crate) fn clear(&mut self) {
        self.members.iter_mut().for_each(|v| v.clear());
        self.members[Class::Neutral.index()] = (0..self.len()).collect();
        self.class.fill(Class::Neutral);
        self.position = (0..self.len()).collect();
    }

    /// Move `node` to `class`. No-op if it is already there.
    pub(crate) fn move_to(&mut self, node: usize, class: Class) {
        debug_assert!(node < self.class.len(), "node out of range");

        let (prev, pos) = (self.class[node], self.position[node]);
        if prev == class { return }

        // Remove from the previous class by swapping with its last member.
        let source = &mut self.members[prev.index()];
        let last = source[source.len() - 1];
        source.swap_remove(pos);
        if last != node { self.position[last] = pos }

        self.class[node] = class;
        self.position[node] = self.members[class.index()].len();
        self.members[class.index()].push(node);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_starts_neutral() {
        let set = ClassSet::new(5);
        assert_eq!(set.len(), 5);
        assert_eq!(set.get(Class::Neutral), &[0, 1, 2, 3, 4]);
        for class in &Class::ALL[1..] { assert!(set.get(*class).is_empty()) }
        assert!(set.assignments().iter().all(|&c| c == Class::Neutral));
    }

    #[test]
    fn move_to_updates_swapped_member() {
        let mut set = ClassSet::new(5);
        set.move_to(1, Class::Separator);

        // 4 took the slot of 1 in Neutral
        assert_eq!(set.get(Class::Neutral), &[0, 4, 2, 3]);
        assert_eq!(set.find(1), Class::Separator);

        set.move_to(4, Class::WardenFringe);
        assert_eq!(set.get(Class::Neutral), &[0, 3, 2]);
        assert_eq!(set.find(3), Class::Neutral);
        set.move_to(3, Class::OppositeInterior);
        assert_eq!(set.get(Class::Neutral), &[0, 2]);
    }

    #[test]
    fn move_to_same_class_is_noop() {
        let mut set = ClassSet::new(3);
        set.move_to(2, Class::Neutral);
        assert_eq!(set.get(Class::Neutral), &[0, 1, 2]);
    }

    #[test]
    fn every_node_is_in_exactly_one_class() {
        let mut set = ClassSet::new(8);
        let moves = [
            (0, Class::WardenSeed), (1, Class::WardenFringe), (2, Class::Separator),
            (1, Class::WardenInterior), (5, Class::OppositeFringe), (7, Class::Separator),
            (2, Class::OppositeInterior), (6, Class::OppositeFixed),
        ];
        for (node, class) in moves { set.move_to(node, class) }

        let mut all = Class::ALL.iter().flat_map(|&c| set.get(c).iter().copied()).collect::<Vec<_>>();
        all.sort_unstable();
        assert_eq!(all, (0..8).collect::<Vec<_>>());
        for node in 0..8 { assert!(set.get(set.find(node)).contains(&node)) }
    }

    #[test]
    fn clear_resets_to_neutral() {
        let mut set = ClassSet::new(4);
        set.move_to(0, Class::WardenSeed);
        set.move_to(3, Class::Separator);
        set.clear();
        assert_eq!(set.get(Class::Neutral), &[0, 1, 2, 3]);
        assert!(set.get(Class::Separator).is_empty());
        assert_eq!(set.find(3), Class::Neutral);
    }
}
