/// House rules shown by the `rules` command.
pub const RULES: &str = "\
GAME RULES
  * Matches are played over 1, 3 or 5 sets.
  * A set goes to 11 points and must be won by 2.
  * From 10-10 on, service changes after every point.

RATING
  * Every player starts at 1500.
  * After a match both sides move by the same number of points, winners up
    and losers down.
  * The amount depends on the rating gap: beating a stronger side earns more
    than beating a weaker one.
  * Doubles teams are rated as the average of their two players.
  * Ratings never drop below 100.

DOUBLES
  * Partners alternate hitting the ball, otherwise the point is lost.
  * After two serves the serving team swaps positions.

SERVICE
  * The serve bounces once on your own half, then on the opponent's.
  * In doubles the serve goes diagonally.

LOSING A POINT
  * A faulty serve or return.
  * The ball goes into the net or off the table.
  * Volleying the ball before it bounced on your side.

DISPUTES
  * When a point is disputed, agree on one neutral arbiter and accept the call.
";
