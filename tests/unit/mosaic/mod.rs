mod averager;
