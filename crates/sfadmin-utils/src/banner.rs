//! Startup banner

/// SF-ADMIN ASCII art printed when the tools start
pub const BANNER: &str = r"
  ####  ######         ##   #####  #    # # #    #
 #      #             #  #  #    # ##  ## # ##   #
  ####  #####  ##### #    # #    # # ## # # # #  #
      # #            ###### #    # #    # # #  # #
 #    # #            #    # #    # #    # # #   ##
  ####  #            #    # #####  #    # # #    #
";

/// Print [`BANNER`] to stdout
pub fn print_banner() {
    println!("{}", BANNER);
}
