mod test_board;
