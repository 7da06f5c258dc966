use crate::rbst::node::Node;
use rand::Rng;
use std::cmp;
use std::cmp::Ordering;

pub type Tree<T> = Option<Box<Node<T>>>;

pub fn len<T>(tree: &Tree<T>) -> usize {
    if let Some(ref node) = tree {
        node.size
    } else {
        0
    }
}

pub fn height<T>(tree: &Tree<T>) -> usize {
    match *tree {
        Some(ref node) => cmp::max(height(&node.left), height(&node.right)) + 1,
        None => 0,
    }
}

pub fn insert<T, R>(tree: &mut Tree<T>, new_key: T, rng: &mut R) -> usize
where
    T: Ord,
    R: Rng,
{
    match tree.take() {
        Some(mut node) => {
            // The new key wins a size-weighted lottery with probability 1/(size + 1) and becomes
            // the root of this subtree through a rebuild.
            if rng.gen::<f64>() < 1.0 / (node.size + 1) as f64 {
                let (rebuilt, visited) = rebuild(node, new_key, rng);
                *tree = Some(rebuilt);
                visited + 1
            } else {
                node.size += 1;
                let visited = if new_key < node.key {
                    insert(&mut node.left, new_key, rng)
                } else {
                    insert(&mut node.right, new_key, rng)
                };
                *tree = Some(node);
                visited + 1
            }
        }
        None => {
            *tree = Some(Box::new(Node::new(new_key)));
            0
        }
    }
}

pub fn rebuild<T, R>(node: Box<Node<T>>, new_key: T, rng: &mut R) -> (Box<Node<T>>, usize)
where
    T: Ord,
    R: Rng,
{
    let old_len = node.size;
    let Flattened { keys, new_index } = flatten(node, new_key);
    let mut slots = keys.into_iter().map(Some).collect::<Vec<Option<T>>>();
    let root = build_at(&mut slots, new_index, rng);
    // One visit per node drained while flattening plus one per key while rebuilding.
    (root, 2 * old_len + 1)
}

pub fn clear<T>(tree: &mut Tree<T>) -> usize {
    match tree.take() {
        Some(mut node) => clear(&mut node.left) + clear(&mut node.right) + 1,
        None => 0,
    }
}

struct Flattened<T> {
    keys: Vec<T>,
    new_index: usize,
}

fn flatten<T>(node: Box<Node<T>>, new_key: T) -> Flattened<T>
where
    T: Ord,
{
    let mut keys = Vec::with_capacity(node.size + 1);
    drain(Some(node), &mut keys);
    // Upper bound: equal keys sort before the new key, so a duplicate ends up in the right
    // subtree of the rebuilt tree.
    let new_index = keys
        .binary_search_by(|key| match key.cmp(&new_key) {
            Ordering::Greater => Ordering::Greater,
            _ => Ordering::Less,
        })
        .unwrap_err();
    keys.insert(new_index, new_key);
    Flattened { keys, new_index }
}

fn drain<T>(tree: Tree<T>, keys: &mut Vec<T>) {
    if let Some(node) = tree {
        let Node {
            key, left, right, ..
        } = *node;
        drain(left, keys);
        keys.push(key);
        drain(right, keys);
    }
}

fn build_at<T, R>(slots: &mut [Option<T>], pivot: usize, rng: &mut R) -> Box<Node<T>>
where
    R: Rng,
{
    let (left, rest) = slots.split_at_mut(pivot);
    let (pivot_slot, right) = rest.split_first_mut().expect("Unreachable code");
    let key = pivot_slot.take().expect("Unreachable code");
    let mut node = Box::new(Node::new(key));
    node.left = build_random(left, rng);
    node.right = build_random(right, rng);
    node.update();
    node
}

fn build_random<T, R>(slots: &mut [Option<T>], rng: &mut R) -> Tree<T>
where
    R: Rng,
{
    if slots.is_empty() {
        None
    } else {
        let pivot = rng.gen_range(0, slots.len());
        Some(build_at(slots, pivot, rng))
    }
}
