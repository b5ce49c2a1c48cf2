use gambit::entry_point;
use gambit::search::MinConflicts;

entry_point!(algorithm = MinConflicts);
