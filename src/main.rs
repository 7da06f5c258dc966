use rand::Rng;
use randomized_bst::rbst::RbstSet;

const NUM_OF_ELEMS: usize = 1_000_000;

fn main() {
    let mut rng = rand::thread_rng();
    let mut tree = RbstSet::new();
    let mut nodes_visited = 0;

    println!("Inserting {} elements in a BST...", NUM_OF_ELEMS);
    for _ in 0..NUM_OF_ELEMS {
        nodes_visited += tree.insert(rng.gen::<u32>());
    }

    println!("Height: {}", tree.height());
    nodes_visited += tree.clear();
    println!("Nodes visited: {}", nodes_visited);
}
