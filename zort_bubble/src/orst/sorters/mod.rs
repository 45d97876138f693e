pub mod bubble_sorter;
