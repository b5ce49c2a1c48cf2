use gambit::entry_point;
use gambit::search::HillClimbing;

entry_point!(algorithm = HillClimbing);
